//! Framed text rendering of boards.

use std::fmt::Write as _;

use gridoku_core::{Board, EMPTY, Position};

/// Renders the working grid with box separators, empty cells as dots.
pub fn render(board: &Board) -> String {
    let side = board.side();
    let box_side = board.layout().box_side();

    let mut separator = String::from("+");
    for _ in 0..box_side {
        separator.push_str(&"-".repeat(2 * box_side + 1));
        separator.push('+');
    }

    let mut out = String::new();
    for y in 0..side {
        if y % box_side == 0 {
            out.push_str(&separator);
            out.push('\n');
        }
        for x in 0..side {
            if x % box_side == 0 {
                out.push_str("| ");
            }
            match board.value(Position::new(x, y)) {
                EMPTY => out.push_str(". "),
                value => {
                    let _ = write!(out, "{value} ");
                }
            }
        }
        out.push_str("|\n");
    }
    out.push_str(&separator);
    out
}
