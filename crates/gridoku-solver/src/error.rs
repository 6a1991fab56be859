//! Solver error types.

/// Errors returned by [`BacktrackSolver`](crate::BacktrackSolver).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolveError {
    /// The clues violate the uniqueness rule before any solving begins.
    #[display("puzzle clues violate the uniqueness rule")]
    InvalidPuzzle,
    /// The search space was exhausted without completing the grid.
    #[display("puzzle has no solution")]
    Unsolvable,
}
