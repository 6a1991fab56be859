//! Iterative backtracking solver for gridoku boards.
//!
//! The solver walks the board's cells in linear row-major order with an
//! explicit cursor and direction instead of recursion: forward to place
//! candidates, backward to revise earlier choices once a cell runs out of
//! them. Clue cells are traversed but never touched. The board's localized
//! consistency check is the per-step oracle, so each candidate costs O(n).
//!
//! Puzzles whose clues already collide are rejected before any search
//! ([`SolveError::InvalidPuzzle`]), and an exhausted search space is
//! reported as [`SolveError::Unsolvable`] instead of running past the
//! grid's bounds.
//!
//! # Examples
//!
//! ```
//! use gridoku_core::Board;
//! use gridoku_solver::BacktrackSolver;
//!
//! let mut board: Board =
//!     " 68   93  42   6  19  8  4  852 1  77  89    2 9  75 3 2 1   5 85  4 76 473 52  9"
//!         .parse()?;
//!
//! let solver = BacktrackSolver::new();
//! let stats = solver.solve(&mut board)?;
//!
//! assert!(board.is_solved());
//! assert!(stats.backtracks > 0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{backtrack::*, error::*};

mod backtrack;
mod error;
