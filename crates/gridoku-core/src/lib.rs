//! Core data structures for the gridoku engine.
//!
//! This crate provides the board model shared by the solver, the play-session
//! layer, and any frontend: a square grid of clues plus working values, with
//! the row/column/box views derived on demand from one canonical store.
//!
//! # Overview
//!
//! - [`layout`]: board geometry ([`Layout`]) and the box-partition index
//!   mapping ([`BoxSlot`]).
//! - [`position`]: the [`Position`] cell coordinate.
//! - [`house`]: the [`House`] uniqueness units (rows, columns, boxes).
//! - [`board`]: the [`Board`] itself — immutable clues, mutable working
//!   values, and derived views.
//! - [`check`]: the uniqueness rule — [`group_is_consistent`] for a single
//!   unit, [`Board::is_consistent`] for the whole grid, and
//!   [`Board::cell_is_consistent`] as a localized oracle for solvers.
//!
//! Boards also convert to and from the dense string format used for puzzle
//! storage: one character per cell in row-major order, ASCII digits for
//! values and anything else (conventionally a space) for empty cells.
//!
//! # Examples
//!
//! ```
//! use gridoku_core::{Board, EMPTY, Position};
//!
//! let mut board: Board = "1234341221434 2 ".parse()?;
//!
//! assert_eq!(board.side(), 4);
//! assert_eq!(board.value(Position::new(0, 0)), 1);
//! assert_eq!(board.value(Position::new(1, 3)), EMPTY);
//! assert!(board.is_consistent());
//!
//! board.set_value(Position::new(1, 3), 3)?;
//! assert_eq!(board.column(1).collect::<Vec<_>>(), vec![2, 4, 1, 3]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    board::{Board, EMPTY},
    check::{group_is_consistent, groups_are_consistent},
    error::{BoardError, ParseBoardError},
    house::House,
    layout::{BoxSlot, Layout},
    position::Position,
};

pub mod board;
pub mod check;
mod codec;
pub mod error;
pub mod house;
pub mod layout;
pub mod position;
