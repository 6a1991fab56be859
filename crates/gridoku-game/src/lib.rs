//! Play-session state for gridoku puzzles.
//!
//! This crate layers player-facing rules on top of the board model: clue
//! cells are protected from modification, pencil notes track candidate
//! values per cell, and a reference solution (computed once with the
//! backtracking solver) supports checking entries and auto-filling the
//! grid. It holds no rendering or input handling; frontends consume it
//! through [`Game`].
//!
//! # Examples
//!
//! ```
//! use gridoku_core::{Board, Position};
//! use gridoku_game::{CellState, Game};
//!
//! let board: Board = "12343412214343  ".parse()?;
//! let mut game = Game::new(board)?;
//!
//! // Clues cannot be overwritten...
//! assert!(game.set_digit(Position::new(0, 0), 2).is_err());
//!
//! // ...but open cells take entries and pencil notes.
//! game.toggle_note(Position::new(2, 3), 2)?;
//! game.set_digit(Position::new(2, 3), 2)?;
//! assert_eq!(game.cell(Position::new(2, 3)), CellState::Filled(2));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{cell_state::CellState, error::GameError, game::Game};

mod cell_state;
mod error;
mod game;
