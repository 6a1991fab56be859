//! The uniqueness rule: duplicate detection over rows, columns, and boxes.

use crate::{Board, EMPTY, Position};

/// Returns `true` if no nonzero value occurs more than once in `values`.
///
/// Empty cells ([`EMPTY`]) denote "unknown", not a collision, so any number
/// of them is allowed; an all-empty group is vacuously consistent.
///
/// Values must stay below 128, which every board guarantees through
/// [`Layout::MAX_SIDE`](crate::Layout::MAX_SIDE).
///
/// # Examples
///
/// ```
/// use gridoku_core::group_is_consistent;
///
/// assert!(group_is_consistent([0, 0, 0, 0]));
/// assert!(group_is_consistent([4, 3, 2, 1]));
/// assert!(group_is_consistent([2, 0, 0, 1]));
/// assert!(!group_is_consistent([1, 0, 0, 1]));
/// ```
pub fn group_is_consistent<I>(values: I) -> bool
where
    I: IntoIterator<Item = u8>,
{
    let mut seen = 0u128;
    for value in values {
        if value == EMPTY {
            continue;
        }
        debug_assert!(value < 128, "cell values are bounded by the layout cap");
        let bit = 1u128 << value;
        if seen & bit != 0 {
            return false;
        }
        seen |= bit;
    }
    true
}

/// Returns `true` if every group passes [`group_is_consistent`].
pub fn groups_are_consistent<I, G>(groups: I) -> bool
where
    I: IntoIterator<Item = G>,
    G: IntoIterator<Item = u8>,
{
    groups.into_iter().all(group_is_consistent)
}

impl Board {
    /// Returns `true` if no row, column, or box holds a duplicate value.
    ///
    /// This is the global soundness check: it does not require the board
    /// to be filled, only collision-free. Use it before solving to reject
    /// puzzles whose clues already break the rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridoku_core::{Board, Position};
    ///
    /// let mut board = Board::new();
    /// board.set_given(Position::new(0, 0), 5)?;
    /// board.set_given(Position::new(8, 0), 5)?;
    /// assert!(!board.is_consistent());
    /// # Ok::<(), gridoku_core::BoardError>(())
    /// ```
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        groups_are_consistent(
            self.layout()
                .houses()
                .map(|house| self.house_values(house)),
        )
    }

    /// Returns `true` if the row, column, and box containing `pos` are
    /// each free of duplicates.
    ///
    /// The localized counterpart of [`Board::is_consistent`]: after a
    /// single write only these three houses can have changed, so this is
    /// the O(n) oracle a solver calls per candidate.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the board.
    #[must_use]
    pub fn cell_is_consistent(&self, pos: Position) -> bool {
        self.layout()
            .houses_of(pos)
            .into_iter()
            .all(|house| group_is_consistent(self.house_values(house)))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_group_consistency_cases() {
        assert!(group_is_consistent(std::iter::empty::<u8>()));
        assert!(group_is_consistent([0; 9]));
        assert!(group_is_consistent([9, 8, 7, 6, 5, 4, 3, 2, 1]));
        assert!(group_is_consistent([0, 3, 0, 1, 0, 2, 0, 0, 4]));
        assert!(!group_is_consistent([5, 0, 0, 0, 5, 0, 0, 0, 0]));
        assert!(!group_is_consistent([1, 2, 3, 4, 5, 6, 7, 8, 8]));
    }

    #[test]
    fn test_groups_are_consistent() {
        assert!(groups_are_consistent([[1, 2, 3], [3, 2, 1]]));
        assert!(!groups_are_consistent([[1, 2, 3], [3, 2, 3]]));
    }

    #[test]
    fn test_duplicate_clue_in_each_unit_kind() {
        // Same column.
        let mut board = Board::new();
        board.set_given(Position::new(3, 1), 7).unwrap();
        board.set_given(Position::new(3, 8), 7).unwrap();
        assert!(!board.is_consistent());

        // Same box, different row and column.
        let mut board = Board::new();
        board.set_given(Position::new(0, 0), 2).unwrap();
        board.set_given(Position::new(1, 1), 2).unwrap();
        assert!(!board.is_consistent());
    }

    #[test]
    fn test_cell_check_is_local() {
        let mut board = Board::new();
        board.set_value(Position::new(0, 0), 4).unwrap();
        board.set_value(Position::new(8, 0), 4).unwrap();

        // The duplicate sits in row 0; distant cells do not see it.
        assert!(!board.cell_is_consistent(Position::new(0, 0)));
        assert!(!board.cell_is_consistent(Position::new(8, 0)));
        assert!(board.cell_is_consistent(Position::new(4, 8)));
    }

    proptest! {
        #[test]
        fn prop_nonzero_repeat_is_inconsistent(
            values in prop::collection::vec(0u8..=9, 9),
            slot_a in 0usize..9,
            slot_b in 0usize..9,
            value in 1u8..=9,
        ) {
            prop_assume!(slot_a != slot_b);
            let mut values = values;
            values[slot_a] = value;
            values[slot_b] = value;
            prop_assert!(!group_is_consistent(values));
        }

        #[test]
        fn prop_permutations_are_consistent(seed in any::<u64>()) {
            let mut values: Vec<u8> = (1..=9).collect();
            // Cheap deterministic shuffle driven by the seed.
            let mut state = seed;
            for i in (1..values.len()).rev() {
                state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
                #[expect(clippy::cast_possible_truncation)]
                let j = (state >> 33) as usize % (i + 1);
                values.swap(i, j);
            }
            prop_assert!(group_is_consistent(values));
        }
    }
}
