//! Benchmarks for the option-ladder-optimizer library.
//!
//! This module provides benchmarks for each stage of the pipeline:
//!
//! - **pricing_bench**: Closed-form option analytics
//! - **combinatorics_bench**: Subset and multiset generation
//! - **optimizer_bench**: Scoring, ranking, and full optimization runs


use criterion::{criterion_group, criterion_main};

// Pricing model benchmarks
criterion_group!(
    pricing_benches,
    pricing_bench::pricing_operations,
    pricing_bench::pricing_scaling,
);

// Combination generator benchmarks
criterion_group!(
    combinatorics_benches,
    combinatorics_bench::combination_operations,
    combinatorics_bench::combination_scaling,
);

// Scorer, ranker, and orchestrator benchmarks
criterion_group!(
    optimizer_benches,
    optimizer_bench::scoring_operations,
    optimizer_bench::optimizer_operations,
    optimizer_bench::optimizer_scaling,
);

criterion_main!(pricing_benches, combinatorics_benches, optimizer_benches);
