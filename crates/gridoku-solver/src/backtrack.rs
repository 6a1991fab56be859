//! Iterative backtracking over the board's linear cell order.

use gridoku_core::{Board, EMPTY, Position};

use crate::SolveError;

/// Statistics collected during a backtracking solve.
///
/// # Examples
///
/// ```
/// use gridoku_core::Board;
/// use gridoku_solver::BacktrackSolver;
///
/// let mut board = Board::with_side(4)?;
/// let stats = BacktrackSolver::new().solve(&mut board)?;
/// assert!(stats.steps >= board.layout().cell_count());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SolveStats {
    /// Number of cursor steps taken, forward and backward combined.
    pub steps: usize,
    /// Number of retreats after a cell exhausted its candidates.
    pub backtracks: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Explicit search state: the linear cell cursor and its travel direction.
///
/// The implicit "stack" of the search is the trail of candidate values left
/// in the working store behind the cursor; retreating re-enters those cells
/// and resumes their candidates from the stored value.
#[derive(Debug)]
struct Cursor {
    index: usize,
    direction: Direction,
}

impl Cursor {
    fn new() -> Self {
        Self {
            index: 0,
            direction: Direction::Forward,
        }
    }

    /// Moves one cell in the current direction.
    ///
    /// Retreating past the first cell means no earlier choice is left to
    /// revise, so the search space is exhausted.
    fn step(&mut self) -> Result<(), SolveError> {
        match self.direction {
            Direction::Forward => self.index += 1,
            Direction::Backward => {
                self.index = self.index.checked_sub(1).ok_or(SolveError::Unsolvable)?;
            }
        }
        Ok(())
    }
}

/// An iterative backtracking solver.
///
/// Cells are visited in increasing linear index and candidates in
/// increasing numeric order, resuming above whatever value a previous pass
/// left in the cell, so the search is fully deterministic: a puzzle with a
/// unique solution yields that solution, and a puzzle with several yields
/// the first one under this exploration order.
///
/// Solving mutates only the working store; the clues are read, never
/// written, and a failed solve leaves the board in whatever partial state
/// the search reached.
///
/// # Examples
///
/// ```
/// use gridoku_core::Board;
/// use gridoku_solver::BacktrackSolver;
///
/// let solver = BacktrackSolver::new();
///
/// let mut board: Board = "1     3  1     2".parse()?;
/// solver.solve(&mut board)?;
/// assert!(board.is_solved());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktrackSolver;

impl BacktrackSolver {
    /// Creates a new solver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Fills every non-clue cell of `board` in place.
    ///
    /// The board's clues are validated first, so a broken puzzle is
    /// rejected without searching.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidPuzzle`] if the working values already
    /// violate the uniqueness rule, or [`SolveError::Unsolvable`] if the
    /// search exhausts every candidate.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridoku_core::{Board, Position};
    /// use gridoku_solver::{BacktrackSolver, SolveError};
    ///
    /// let mut board = Board::new();
    /// board.set_given(Position::new(0, 0), 5)?;
    /// board.set_given(Position::new(3, 0), 5)?;
    ///
    /// let result = BacktrackSolver::new().solve(&mut board);
    /// assert_eq!(result, Err(SolveError::InvalidPuzzle));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn solve(&self, board: &mut Board) -> Result<SolveStats, SolveError> {
        if !board.is_consistent() {
            return Err(SolveError::InvalidPuzzle);
        }

        let layout = board.layout();
        let side = layout.side();
        let mut stats = SolveStats::default();
        let mut cursor = Cursor::new();

        while cursor.index < layout.cell_count() {
            let pos = layout.position_of(cursor.index);
            if !board.is_given(pos) {
                let mut value = board.value(pos);
                let mut placed = false;
                while !placed && usize::from(value) < side {
                    value += 1;
                    write_cell(board, pos, value);
                    placed = board.cell_is_consistent(pos);
                }
                if placed {
                    cursor.direction = Direction::Forward;
                } else {
                    write_cell(board, pos, EMPTY);
                    cursor.direction = Direction::Backward;
                    stats.backtracks += 1;
                }
            }
            // Clues are traversed in either direction but never revised.
            cursor.step()?;
            stats.steps += 1;
        }

        Ok(stats)
    }

    /// Returns a solved copy of `board`, leaving the original untouched.
    ///
    /// # Errors
    ///
    /// Same conditions as [`BacktrackSolver::solve`].
    pub fn solution(&self, board: &Board) -> Result<Board, SolveError> {
        let mut solved = board.clone();
        self.solve(&mut solved)?;
        Ok(solved)
    }
}

fn write_cell(board: &mut Board, pos: Position, value: u8) {
    board
        .set_value(pos, value)
        .expect("solver writes stay within the board range");
}
