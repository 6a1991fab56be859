//! Command-line interface for the gridoku engine.
//!
//! # Usage
//!
//! Solve a puzzle given as a dense string (digits and spaces, one
//! character per cell):
//!
//! ```sh
//! gridoku solve " 68   93  42   6  19  8  4  852 1  77  89    2 9  75 3 2 1   5 85  4 76 473 52  9"
//! ```
//!
//! Solve a random puzzle from the store, printing the dense form:
//!
//! ```sh
//! gridoku solve --file sudoku.txt --dense
//! ```
//!
//! Validate, store, and display puzzles:
//!
//! ```sh
//! gridoku check "…"
//! gridoku save "…" --file sudoku.txt
//! gridoku show --file sudoku.txt
//! ```

use std::{
    path::{Path, PathBuf},
    process,
};

use clap::{Parser, Subcommand};
use gridoku_core::Board;
use gridoku_solver::BacktrackSolver;

mod render;
mod store;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve a puzzle and print the completed grid.
    Solve {
        /// Dense puzzle string. Omit to load a random stored puzzle.
        grid: Option<String>,

        /// Puzzle store to load from when no grid is given.
        #[arg(long, value_name = "PATH", default_value = "sudoku.txt")]
        file: PathBuf,

        /// Print the dense single-line form instead of the framed grid.
        #[arg(long)]
        dense: bool,
    },
    /// Check a puzzle for rule violations and solvability.
    Check {
        /// Dense puzzle string. Omit to load a random stored puzzle.
        grid: Option<String>,

        /// Puzzle store to load from when no grid is given.
        #[arg(long, value_name = "PATH", default_value = "sudoku.txt")]
        file: PathBuf,
    },
    /// Validate a puzzle and append it to the store.
    Save {
        /// Dense puzzle string.
        grid: String,

        /// Puzzle store to append to.
        #[arg(long, value_name = "PATH", default_value = "sudoku.txt")]
        file: PathBuf,
    },
    /// Display a puzzle without solving it.
    Show {
        /// Dense puzzle string. Omit to load a random stored puzzle.
        grid: Option<String>,

        /// Puzzle store to load from when no grid is given.
        #[arg(long, value_name = "PATH", default_value = "sudoku.txt")]
        file: PathBuf,
    },
}

fn main() -> process::ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(args.command) {
        Ok(()) => process::ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            process::ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Solve { grid, file, dense } => {
            let mut board = load_board(grid, &file)?;
            let stats = BacktrackSolver::new().solve(&mut board)?;
            log::debug!(
                "search took {} steps with {} backtracks",
                stats.steps,
                stats.backtracks
            );
            if dense {
                println!("{board}");
            } else {
                println!("{}", render::render(&board));
            }
        }
        Command::Check { grid, file } => {
            let board = load_board(grid, &file)?;
            match BacktrackSolver::new().solution(&board) {
                Ok(_) => println!("ok: puzzle is consistent and solvable"),
                Err(err) => {
                    println!("invalid: {err}");
                    process::exit(1);
                }
            }
        }
        Command::Save { grid, file } => {
            let board: Board = grid.parse()?;
            store::append(&file, &board)?;
            println!("saved puzzle to {}", file.display());
        }
        Command::Show { grid, file } => {
            let board = load_board(grid, &file)?;
            println!("{}", render::render(&board));
        }
    }
    Ok(())
}

fn load_board(grid: Option<String>, file: &Path) -> Result<Board, Box<dyn std::error::Error>> {
    match grid {
        Some(text) => Ok(text.parse()?),
        None => {
            let board = store::load_random(file)?;
            log::info!("loaded a stored puzzle from {}", file.display());
            Ok(board)
        }
    }
}
