//! Error types for board construction, mutation, and decoding.

/// Errors from board construction or cell writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// A value above the board side was written or supplied.
    #[display("value {value} is out of range for a {side}x{side} board")]
    OutOfRangeValue {
        /// The rejected value.
        value: u8,
        /// The board side length.
        side: usize,
    },
    /// The requested side length cannot form a boxed square board.
    #[display("side {side} is not a supported perfect square")]
    InvalidSide {
        /// The rejected side length.
        side: usize,
    },
    /// A clue array's length is not the square of a supported side.
    #[display("clue array length {len} does not form a boxed square board")]
    InvalidLength {
        /// The rejected array length.
        len: usize,
    },
}

/// Errors from decoding a dense board string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// Input length is not the square of a supported side.
    ///
    /// Truncating or padding would silently change the puzzle, so such
    /// inputs are rejected outright.
    #[display("input length {len} does not form a boxed square board")]
    MalformedLength {
        /// The rejected input length.
        len: usize,
    },
    /// A digit character exceeds the board side.
    #[display("digit {value} is out of range for a {side}x{side} board")]
    OutOfRangeDigit {
        /// The rejected digit value.
        value: u8,
        /// The board side length.
        side: usize,
    },
}
