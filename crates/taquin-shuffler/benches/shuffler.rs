//! Benchmarks for grid shuffling.
//!
//! This benchmark suite measures the cost of producing a starting
//! arrangement from a seed under both shuffle policies.
//!
//! # Benchmarks
//!
//! - **`shuffle_any_permutation`**: A single Fisher-Yates pass over the 16
//!   cell values.
//! - **`shuffle_solvable_only`**: The same pass plus the inversion-parity
//!   test, redrawing until it passes (two attempts on average).
//!
//! # Test Data
//!
//! Uses three fixed seeds to ensure reproducibility while testing multiple cases:
//!
//! - **`seed_0`**: `c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1`
//! - **`seed_1`**: `a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3`
//! - **`seed_2`**: `1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef`
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench shuffler
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use taquin_shuffler::{ShufflePolicy, ShuffleSeed, Shuffler};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_shuffle_any_permutation(c: &mut Criterion) {
    let shuffler = Shuffler::new();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = ShuffleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("shuffle_any_permutation", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| shuffler.shuffle_with_seed(seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_shuffle_solvable_only(c: &mut Criterion) {
    let shuffler = Shuffler::with_policy(ShufflePolicy::SolvableOnly);

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = ShuffleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("shuffle_solvable_only", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| shuffler.shuffle_with_seed(seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_shuffle_any_permutation,
        bench_shuffle_solvable_only
);
criterion_main!(benches);
