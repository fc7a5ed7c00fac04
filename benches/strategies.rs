//! Benchmark suite for comparing processing strategies
//!
//! This benchmark compares the performance of synchronous and asynchronous
//! processing strategies using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//! ```
//!
//! # Benchmark Fixtures
//!
//! Two representative CSV files are used:
//! - `benchmark_small.csv` - Small dataset (~100 operations)
//! - `benchmark_medium.csv` - Medium dataset (~1,000 operations)
//!
//! Each fixture cycles through create / approve / approve so every
//! transfer reaches quorum and exercises the release path.

use rust_multisig_engine::cli::StrategyType;
use rust_multisig_engine::strategy::{create_strategy, BatchConfig, WalletConfig};
use std::path::Path;

fn main() {
    divan::main();
}

/// Wallet configuration sized so every benchmark transfer can be released
fn bench_wallet() -> WalletConfig {
    WalletConfig {
        approvers: vec!["a0".to_string(), "a1".to_string(), "a2".to_string()],
        quorum: 2,
        funding: 1_000_000,
    }
}

/// Benchmark synchronous processing strategy with small dataset (~100 operations)
#[divan::bench]
fn sync_strategy_small() {
    let strategy = create_strategy(StrategyType::Sync, None);
    let path = Path::new("benches/fixtures/benchmark_small.csv");
    let mut output = Vec::new();

    strategy
        .process(&bench_wallet(), path, &mut output)
        .expect("Processing failed");
}

/// Benchmark asynchronous processing strategy with small dataset (~100 operations)
#[divan::bench]
fn async_strategy_small() {
    let strategy = create_strategy(StrategyType::Async, Some(BatchConfig::default()));
    let path = Path::new("benches/fixtures/benchmark_small.csv");
    let mut output = Vec::new();

    strategy
        .process(&bench_wallet(), path, &mut output)
        .expect("Processing failed");
}

/// Benchmark synchronous processing strategy with medium dataset (~1,000 operations)
#[divan::bench]
fn sync_strategy_medium() {
    let strategy = create_strategy(StrategyType::Sync, None);
    let path = Path::new("benches/fixtures/benchmark_medium.csv");
    let mut output = Vec::new();

    strategy
        .process(&bench_wallet(), path, &mut output)
        .expect("Processing failed");
}

/// Benchmark asynchronous processing strategy with medium dataset (~1,000 operations)
#[divan::bench]
fn async_strategy_medium() {
    let strategy = create_strategy(StrategyType::Async, Some(BatchConfig::default()));
    let path = Path::new("benches/fixtures/benchmark_medium.csv");
    let mut output = Vec::new();

    strategy
        .process(&bench_wallet(), path, &mut output)
        .expect("Processing failed");
}
