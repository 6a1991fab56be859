//! Play-session error types.

use gridoku_core::{BoardError, Position};
use gridoku_solver::SolveError;

/// Errors from play-session operations.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GameError {
    /// The target cell is a fixed clue.
    #[display("cell {pos} is a given and cannot be modified")]
    CannotModifyGivenCell {
        /// The protected cell.
        pos: Position,
    },
    /// The underlying board rejected the write.
    #[display("{_0}")]
    Board(#[from] BoardError),
    /// The puzzle cannot produce a reference solution.
    #[display("no reference solution: {_0}")]
    Solve(#[from] SolveError),
}
