//! The play session: a board, its reference solution, and pencil notes.

use std::collections::BTreeSet;

use gridoku_core::{Board, BoardError, EMPTY, Position};
use gridoku_solver::BacktrackSolver;

use crate::{CellState, GameError};

/// A puzzle play session.
///
/// Wraps a [`Board`] with the rules a frontend needs: clue cells reject
/// player writes, per-cell pencil notes record candidate values, and a
/// reference solution — solved from the clues at construction time —
/// backs entry checking and auto-fill.
///
/// # Examples
///
/// ```
/// use gridoku_core::{Board, Position};
/// use gridoku_game::Game;
///
/// let board: Board = "12343412214343  ".parse()?;
/// let mut game = Game::new(board)?;
///
/// game.set_digit(Position::new(2, 3), 1)?;
/// assert_eq!(game.wrong_cells(), vec![Position::new(2, 3)]);
///
/// game.fill_solution();
/// assert!(game.is_solved());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    solution: Board,
    notes: Vec<BTreeSet<u8>>,
}

impl Game {
    /// Creates a session for `board`, computing its reference solution.
    ///
    /// The solution is derived from the clues alone; any working values
    /// already on the board are kept as player entries.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Solve`] if the clues are inconsistent or the
    /// puzzle has no solution.
    pub fn new(board: Board) -> Result<Self, GameError> {
        let solution = solve_from_givens(&board)?;
        let notes = vec![BTreeSet::new(); board.layout().cell_count()];
        Ok(Self {
            board,
            solution,
            notes,
        })
    }

    /// Returns the current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the reference solution.
    #[must_use]
    pub fn solution(&self) -> &Board {
        &self.solution
    }

    /// Returns the state of the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the board.
    #[must_use]
    pub fn cell(&self, pos: Position) -> CellState {
        if self.board.is_given(pos) {
            CellState::Given(self.board.given(pos))
        } else {
            match self.board.value(pos) {
                EMPTY => CellState::Empty,
                value => CellState::Filled(value),
            }
        }
    }

    /// Returns the pencil notes at `pos` in increasing order.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the board.
    pub fn notes(&self, pos: Position) -> impl Iterator<Item = u8> + '_ {
        self.notes[self.board.layout().index_of(pos)].iter().copied()
    }

    /// Enters `value` into the cell at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] for clue cells and
    /// [`GameError::Board`] for out-of-range values.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the board.
    pub fn set_digit(&mut self, pos: Position, value: u8) -> Result<(), GameError> {
        self.ensure_writable(pos)?;
        self.board.set_value(pos, value)?;
        Ok(())
    }

    /// Clears the player entry at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] for clue cells.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the board.
    pub fn clear_cell(&mut self, pos: Position) -> Result<(), GameError> {
        self.ensure_writable(pos)?;
        self.board.set_value(pos, EMPTY)?;
        Ok(())
    }

    /// Adds `value` to the pencil notes at `pos`, or removes it if already
    /// present.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] for clue cells and
    /// [`GameError::Board`] for values outside `1..=n`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the board.
    pub fn toggle_note(&mut self, pos: Position, value: u8) -> Result<(), GameError> {
        self.ensure_writable(pos)?;
        let side = self.board.side();
        if value == EMPTY || usize::from(value) > side {
            return Err(GameError::Board(BoardError::OutOfRangeValue {
                value,
                side,
            }));
        }
        let notes = &mut self.notes[self.board.layout().index_of(pos)];
        if !notes.remove(&value) {
            notes.insert(value);
        }
        Ok(())
    }

    /// Removes every pencil note at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the board.
    pub fn clear_notes(&mut self, pos: Position) {
        self.notes[self.board.layout().index_of(pos)].clear();
    }

    /// Permanently edits a clue and recomputes the reference solution.
    ///
    /// Passing [`EMPTY`] turns a clue back into an open cell. Player
    /// entries elsewhere on the board are kept.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Board`] for out-of-range values, and
    /// [`GameError::Solve`] if the edited clues no longer admit a
    /// solution — the edit itself is kept either way.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the board.
    pub fn set_given(&mut self, pos: Position, value: u8) -> Result<(), GameError> {
        self.board.set_given(pos, value)?;
        self.solution = solve_from_givens(&self.board)?;
        Ok(())
    }

    /// Returns the player-filled cells whose value differs from the
    /// reference solution, in row-major order.
    #[must_use]
    pub fn wrong_cells(&self) -> Vec<Position> {
        self.board
            .layout()
            .positions()
            .filter(|&pos| match self.cell(pos) {
                CellState::Filled(value) => value != self.solution.value(pos),
                CellState::Given(_) | CellState::Empty => false,
            })
            .collect()
    }

    /// Copies the reference solution into every non-clue cell.
    pub fn fill_solution(&mut self) {
        for pos in self.board.layout().positions() {
            if !self.board.is_given(pos) {
                let value = self.solution.value(pos);
                self.board
                    .set_value(pos, value)
                    .expect("solution values stay within the board range");
            }
        }
    }

    /// Clears every player entry, restoring the board to its clues.
    pub fn clear_entries(&mut self) {
        self.board.reset_to_givens();
    }

    /// Returns `true` once the board is completely and correctly filled.
    ///
    /// Any valid completion counts, not only the stored reference
    /// solution, so puzzles with several solutions are handled fairly.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    fn ensure_writable(&self, pos: Position) -> Result<(), GameError> {
        if self.board.is_given(pos) {
            return Err(GameError::CannotModifyGivenCell { pos });
        }
        Ok(())
    }
}

/// Solves a copy of `board` reduced to its clues.
fn solve_from_givens(board: &Board) -> Result<Board, GameError> {
    let mut solution = board.clone();
    solution.reset_to_givens();
    BacktrackSolver::new().solve(&mut solution)?;
    Ok(solution)
}
