//! Flat-file puzzle store: one quoted dense string per line.
//!
//! Puzzles are appended, never overwritten, so the file accumulates every
//! grid ever saved; loading picks one line at random. Lines that do not
//! look like quoted puzzles are skipped on load, which keeps the reader
//! tolerant of blank lines and hand-edits.

use std::{
    fs::{File, OpenOptions},
    io::{BufRead, BufReader, Write as _},
    path::Path,
};

use gridoku_core::{Board, ParseBoardError};
use rand::seq::IndexedRandom as _;

/// Errors from loading or saving stored puzzles.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum StoreError {
    /// The store holds no usable puzzle line.
    #[display("puzzle store {path} holds no puzzles")]
    Empty {
        /// The store path.
        path: String,
    },
    /// The store could not be read or written.
    #[display("{_0}")]
    Io(#[from] std::io::Error),
    /// A stored line did not decode as a board.
    #[display("stored puzzle does not decode: {_0}")]
    Parse(#[from] ParseBoardError),
}

/// Appends the board's working values as one quoted line.
pub fn append(path: &Path, board: &Board) -> Result<(), StoreError> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", format_line(board))?;
    Ok(())
}

/// Loads one randomly chosen puzzle from the store.
pub fn load_random(path: &Path) -> Result<Board, StoreError> {
    let file = File::open(path)?;
    let lines: Vec<String> = BufReader::new(file).lines().collect::<Result<_, _>>()?;
    let puzzles: Vec<&str> = lines.iter().filter_map(|line| parse_line(line)).collect();
    let chosen = puzzles
        .choose(&mut rand::rng())
        .ok_or_else(|| StoreError::Empty {
            path: path.display().to_string(),
        })?;
    Ok(chosen.parse()?)
}

fn format_line(board: &Board) -> String {
    format!("'{board}'")
}

/// Strips the surrounding quotes from a store line; `None` for lines that
/// are blank or unquoted.
fn parse_line(line: &str) -> Option<&str> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let inner = line
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
        .or_else(|| {
            line.strip_prefix('"')
                .and_then(|rest| rest.strip_suffix('"'))
        })?;
    (!inner.is_empty()).then_some(inner)
}

#[cfg(test)]
mod tests {
    use std::{env, fs, process};

    use super::*;

    const PUZZLE: &str = "12343412214343  ";

    #[test]
    fn test_line_format_roundtrip() {
        let board: Board = PUZZLE.parse().unwrap();
        let line = format_line(&board);
        assert_eq!(line, format!("'{PUZZLE}'"));
        assert_eq!(parse_line(&line), Some(PUZZLE));
    }

    #[test]
    fn test_parse_line_skips_junk() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("''"), None);
        assert_eq!(parse_line("unquoted text"), None);
        assert_eq!(parse_line("'half open"), None);
        assert_eq!(parse_line("\"double quoted\""), Some("double quoted"));
        assert_eq!(parse_line("'with cr'\r"), Some("with cr"));
    }

    #[test]
    fn test_append_then_load() {
        let path = env::temp_dir().join(format!(
            "gridoku-store-append-{}.txt",
            process::id()
        ));
        let _ = fs::remove_file(&path);

        let board: Board = PUZZLE.parse().unwrap();
        append(&path, &board).unwrap();
        append(&path, &board).unwrap();

        let loaded = load_random(&path).unwrap();
        assert_eq!(loaded, board);

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2, "append must not overwrite");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_empty_store_is_an_error() {
        let path = env::temp_dir().join(format!(
            "gridoku-store-empty-{}.txt",
            process::id()
        ));
        fs::write(&path, "\nnot a puzzle\n").unwrap();

        let result = load_random(&path);
        assert!(matches!(result, Err(StoreError::Empty { .. })));

        fs::remove_file(&path).unwrap();
    }
}
