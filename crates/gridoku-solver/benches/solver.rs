//! Benchmarks for full backtracking solves.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use gridoku_core::Board;
use gridoku_solver::BacktrackSolver;

const CLASSIC: &str =
    " 68   93  42   6  19  8  4  852 1  77  89    2 9  75 3 2 1   5 85  4 76 473 52  9";
const SPARSE: &str =
    "3  9   71   527    9        783    5  961 8         3  2     9 51   6     32   8 ";

fn bench_solve(c: &mut Criterion) {
    let puzzles = [
        ("classic", CLASSIC.parse::<Board>().unwrap()),
        ("sparse", SPARSE.parse::<Board>().unwrap()),
        ("empty", Board::new()),
    ];

    let solver = BacktrackSolver::new();

    for (param, board) in puzzles {
        c.bench_with_input(
            BenchmarkId::new("backtrack_solve", param),
            &board,
            |b, board| {
                b.iter_batched_ref(
                    || hint::black_box(board.clone()),
                    |board| {
                        let stats = solver.solve(board).unwrap();
                        hint::black_box(stats)
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
