//! # Evolution and Eigen-Decomposition Benchmarks
//!
//! Measures evolution throughput over growing state sizes and the cost of
//! eigen-decomposing Hermitian matrices.
//!
//! Run: `cargo bench --bench evolution_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num_complex::Complex;
use qlinear::linalg::{add, adjoint};
use qlinear::{ComplexMatrix, ComplexVector, EvolutionSequence, Evolver, eigen_decompose, evolve};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_matrix(rng: &mut StdRng, n: usize) -> ComplexMatrix {
    let rows = (0..n)
        .map(|_| {
            (0..n)
                .map(|_| Complex::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)))
                .collect()
        })
        .collect();
    ComplexMatrix::new(rows).expect("square rows")
}

/// Benchmark evolve over sequences of random operators
fn bench_evolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolve");
    let mut rng = StdRng::seed_from_u64(42);

    for n in [4usize, 16, 64] {
        let sequence: EvolutionSequence = (0..32).map(|_| random_matrix(&mut rng, n)).collect();
        let initial = ComplexVector::basis(n, 0).expect("n > 0");
        group.bench_with_input(BenchmarkId::new("32_steps", n), &n, |b, _| {
            b.iter(|| black_box(evolve(&initial, &sequence)))
        });
        group.bench_with_input(BenchmarkId::new("32_steps_traced", n), &n, |b, _| {
            b.iter(|| black_box(Evolver::new().run(&sequence, &initial)))
        });
    }

    group.finish();
}

/// Benchmark eigen-decomposition of Hermitian matrices
fn bench_eigen(c: &mut Criterion) {
    let mut group = c.benchmark_group("eigen_decompose");
    let mut rng = StdRng::seed_from_u64(7);

    for n in [2usize, 5, 10] {
        let m = random_matrix(&mut rng, n);
        let hermitian = add(&m, &adjoint(&m)).expect("same shape");
        group.bench_with_input(BenchmarkId::from_parameter(n), &hermitian, |b, h| {
            b.iter(|| black_box(eigen_decompose(h)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_evolve, bench_eigen);
criterion_main!(benches);
