//! Dense-string codec for boards.
//!
//! The persisted puzzle format is strictly positional: one character per
//! cell in row-major order, so character `l` maps to the cell at
//! `(l % n, l / n)`. ASCII digits become values; any other character
//! (conventionally a space) becomes an empty cell. Parsing is the
//! [`FromStr`] impl, encoding the [`Display`] impl, and for boards whose
//! values are single digits the two are exact inverses.

use std::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use crate::{Board, EMPTY, Layout, ParseBoardError};

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Decodes a dense puzzle string into a board.
    ///
    /// Every nonzero decoded value becomes a clue, so a parsed board can
    /// be handed straight to a solver or a play session.
    ///
    /// # Errors
    ///
    /// Returns [`ParseBoardError::MalformedLength`] if the character count
    /// is not the square of a supported side, and
    /// [`ParseBoardError::OutOfRangeDigit`] if a digit exceeds the side
    /// (for example a `'9'` in a 4×4 puzzle).
    ///
    /// # Examples
    ///
    /// ```
    /// use gridoku_core::{Board, Position};
    ///
    /// let board: Board = "1234341221434 2 ".parse()?;
    /// assert_eq!(board.side(), 4);
    /// assert_eq!(board.value(Position::new(2, 3)), 2);
    /// assert!(!board.is_given(Position::new(1, 3)));
    /// # Ok::<(), gridoku_core::ParseBoardError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        let side = len.isqrt();
        if side * side != len {
            return Err(ParseBoardError::MalformedLength { len });
        }
        let layout =
            Layout::new(side).map_err(|_| ParseBoardError::MalformedLength { len })?;

        let mut givens = vec![EMPTY; len];
        for (index, ch) in s.chars().enumerate() {
            let Some(digit) = ch.to_digit(10) else {
                continue;
            };
            #[expect(clippy::cast_possible_truncation)]
            let value = digit as u8;
            if usize::from(value) > side {
                return Err(ParseBoardError::OutOfRangeDigit { value, side });
            }
            givens[index] = value;
        }
        Ok(Self::from_parts(layout, givens))
    }
}

impl Display for Board {
    /// Encodes the working values as a dense puzzle string.
    ///
    /// Digits are written as-is and empty cells as single spaces, row by
    /// row with no separators — the exact inverse of parsing for boards
    /// whose side is at most 9. Values above 9 cannot be expressed in one
    /// character and are written as `'?'`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &value in self.values() {
            match value {
                EMPTY => f.write_char(' ')?,
                1..=9 => write!(f, "{value}")?,
                _ => f.write_char('?')?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::Position;

    const CLASSIC: &str = " 68   93  42   6  19  8  4  852 1  77  89    2 9  75 3 2 1   5 85  4 76 473 52  9";

    #[test]
    fn test_decode_maps_characters_positionally() {
        let board: Board = CLASSIC.parse().unwrap();
        assert_eq!(board.side(), 9);

        // Character 1 is '6' -> cell (1, 0); character 9 is ' ' -> (0, 1).
        assert_eq!(board.value(Position::new(1, 0)), 6);
        assert_eq!(board.value(Position::new(0, 1)), EMPTY);
        assert_eq!(board.value(Position::new(8, 8)), 9);
        assert!(board.is_given(Position::new(1, 0)));
        assert!(!board.is_given(Position::new(0, 1)));
    }

    #[test]
    fn test_decode_treats_any_non_digit_as_empty() {
        let board: Board = "1.2_3-4x.2a.~!c4".parse().unwrap();
        assert_eq!(board.side(), 4);
        assert_eq!(board.value(Position::new(0, 0)), 1);
        assert_eq!(board.value(Position::new(1, 0)), EMPTY);
        assert_eq!(board.value(Position::new(2, 0)), 2);
        assert_eq!(board.value(Position::new(0, 1)), 3);
        assert_eq!(board.value(Position::new(1, 2)), 2);
        assert_eq!(board.value(Position::new(3, 3)), 4);
    }

    #[test]
    fn test_malformed_lengths_are_rejected() {
        // 15 characters: not a square.
        assert_eq!(
            "1   3    2 4  3".parse::<Board>(),
            Err(ParseBoardError::MalformedLength { len: 15 })
        );
        // 25 characters: square, but a 5x5 board has no integer box side.
        assert_eq!(
            " ".repeat(25).parse::<Board>(),
            Err(ParseBoardError::MalformedLength { len: 25 })
        );
    }

    #[test]
    fn test_digits_above_the_side_are_rejected() {
        assert_eq!(
            "5               ".parse::<Board>(),
            Err(ParseBoardError::OutOfRangeDigit { value: 5, side: 4 })
        );
    }

    #[test]
    fn test_zero_character_decodes_as_empty() {
        let board: Board = "0000000000000001".parse().unwrap();
        assert_eq!(board.value(Position::new(0, 0)), EMPTY);
        assert!(!board.is_given(Position::new(0, 0)));
        assert_eq!(board.value(Position::new(3, 3)), 1);
    }

    #[test]
    fn test_encode_is_the_inverse_of_decode() {
        let board: Board = CLASSIC.parse().unwrap();
        assert_eq!(board.to_string(), CLASSIC);
    }

    proptest! {
        #[test]
        fn prop_roundtrip_through_the_dense_format(
            values in prop::collection::vec(0u8..=9, 81),
        ) {
            let board = Board::from_givens(&values).unwrap();
            let encoded = board.to_string();
            prop_assert_eq!(encoded.chars().count(), 81);
            let decoded: Board = encoded.parse().unwrap();
            prop_assert_eq!(decoded, board);
        }
    }
}
