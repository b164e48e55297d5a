use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nodus::examples::{map_colouring, sudoku};
use nodus::solver::engine::SolverEngine;

#[rustfmt::skip]
const PUZZLE: [u8; 81] = [
    5, 3, 0, 0, 7, 0, 0, 0, 0,
    6, 0, 0, 1, 9, 5, 0, 0, 0,
    0, 9, 8, 0, 0, 0, 0, 6, 0,
    8, 0, 0, 0, 6, 0, 0, 0, 3,
    4, 0, 0, 8, 0, 3, 0, 0, 1,
    7, 0, 0, 0, 2, 0, 0, 0, 6,
    0, 6, 0, 0, 0, 0, 2, 8, 0,
    0, 0, 0, 4, 1, 9, 0, 0, 5,
    0, 0, 0, 0, 8, 0, 0, 7, 9,
];

fn bench_australia(c: &mut Criterion) {
    let store = map_colouring::australia().unwrap();
    let engine = SolverEngine::default();
    c.bench_function("australia_map_colouring", |b| {
        b.iter(|| {
            let (solution, _stats) = engine.solve(black_box(&store));
            assert!(solution.is_some());
        })
    });
}

fn bench_sudoku_solve(c: &mut Criterion) {
    let store = sudoku::sudoku_csp(&PUZZLE).unwrap();
    let engine = SolverEngine::default();
    c.bench_function("sudoku_standard_puzzle", |b| {
        b.iter(|| {
            let (solution, _stats) = engine.solve(black_box(&store));
            assert!(solution.is_some());
        })
    });
}

fn bench_sudoku_construction(c: &mut Criterion) {
    c.bench_function("sudoku_store_construction", |b| {
        b.iter(|| sudoku::sudoku_csp(black_box(&PUZZLE)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_australia,
    bench_sudoku_solve,
    bench_sudoku_construction
);
criterion_main!(benches);
