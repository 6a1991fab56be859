//! Row, column, and box units.

use crate::{Layout, Position};

/// A single uniqueness unit of the board: one row, column, or box.
///
/// Every cell belongs to exactly three houses — its row, its column, and
/// its box — and the Sudoku rule requires each house to hold no duplicate
/// nonzero value. Houses carry only their identity; the positions they
/// cover depend on a [`Layout`].
///
/// # Examples
///
/// ```
/// use gridoku_core::{House, Layout, Position};
///
/// let layout = Layout::new(9)?;
/// let row = House::Row { y: 2 };
/// assert_eq!(row.position_at(layout, 5), Position::new(5, 2));
///
/// // The three houses of the center cell.
/// let houses = layout.houses_of(Position::new(4, 4));
/// assert_eq!(houses[2], House::Box { index: 4 });
/// # Ok::<(), gridoku_core::BoardError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum House {
    /// A row identified by its y coordinate.
    Row {
        /// Row index (0-based).
        y: usize,
    },
    /// A column identified by its x coordinate.
    Column {
        /// Column index (0-based).
        x: usize,
    },
    /// A box identified by its index (row-major over boxes).
    Box {
        /// Box index (0-based).
        index: usize,
    },
}

impl House {
    /// Converts a cell index within the house into an absolute position.
    ///
    /// Cells are ordered left to right for rows, top to bottom for columns,
    /// and row-major within boxes.
    ///
    /// # Panics
    ///
    /// Panics if `i` or the house identity is not below the layout side.
    #[must_use]
    pub fn position_at(self, layout: Layout, i: usize) -> Position {
        assert!(i < layout.side());
        match self {
            Self::Row { y } => Position::new(i, y),
            Self::Column { x } => Position::new(x, i),
            Self::Box { index } => layout.position_in_box(index, i),
        }
    }
}

impl Layout {
    /// Returns every house of the board: all rows, then all columns, then
    /// all boxes.
    pub fn houses(self) -> impl Iterator<Item = House> {
        let side = self.side();
        (0..side)
            .map(|y| House::Row { y })
            .chain((0..side).map(|x| House::Column { x }))
            .chain((0..side).map(|index| House::Box { index }))
    }

    /// Returns the three houses containing `pos`: its row, its column, and
    /// its box.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the board.
    #[must_use]
    pub fn houses_of(self, pos: Position) -> [House; 3] {
        [
            House::Row { y: pos.y() },
            House::Column { x: pos.x() },
            House::Box {
                index: self.box_slot(pos).block,
            },
        ]
    }

    /// Returns the positions covered by `house` in unit-local order.
    pub fn house_positions(self, house: House) -> impl Iterator<Item = Position> {
        (0..self.side()).map(move |i| house.position_at(self, i))
    }
}
