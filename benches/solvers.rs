use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use mazeway::{
    generators::generate_maze,
    solvers::{Solver, solve_maze},
};

const ROWS: usize = 50;
const COLS: usize = 50;
const SEED: u64 = 2024;

pub fn generation(c: &mut Criterion) {
    c.bench_function("generate_50x50", |b| {
        b.iter(|| generate_maze(black_box(ROWS), black_box(COLS), Some(SEED)).unwrap())
    });
}

pub fn solving(c: &mut Criterion) {
    let layout = generate_maze(ROWS, COLS, Some(SEED)).unwrap();
    for solver in Solver::ALL {
        c.bench_function(&format!("solve_50x50_{:?}", solver), |b| {
            b.iter(|| solve_maze(black_box(&layout), solver, None, None).unwrap())
        });
    }
}

criterion_group! {name = benches; config = Criterion::default().sample_size(20); targets = generation, solving}
criterion_main!(benches);
