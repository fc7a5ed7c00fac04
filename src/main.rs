//! Multisig Approval Engine CLI
//!
//! Command-line interface for processing wallet operations from CSV files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --approvers a0,a1,a2 --quorum 2 --funding 10000 operations.csv > transfers.csv
//! cargo run -- --approvers a0,a1,a2 --quorum 2 --strategy sync operations.csv > transfers.csv
//! cargo run -- --approvers a0,a1,a2 --quorum 2 --strategy async --batch-size 500 operations.csv > transfers.csv
//! ```
//!
//! The program reads operation records from the input CSV file, drives
//! them through the approval engine using the selected processing
//! strategy, and outputs the final transfer states to stdout.
//!
//! # Processing Strategies
//!
//! - **sync**: Synchronous CSV parsing with single-threaded processing
//! - **async**: Asynchronous batched reading over a shared engine (default)
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (invalid configuration, file not found, I/O error, etc.)

use rust_multisig_engine::cli;
use rust_multisig_engine::strategy;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Wallet configuration is validated when the engine is constructed
    let config = args.to_wallet_config();

    // Create the appropriate processing strategy based on CLI arguments
    let strategy = {
        let batch_config = if matches!(args.strategy, cli::StrategyType::Async) {
            Some(args.to_batch_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy, batch_config)
    };

    // Process operations using the selected strategy
    // Output goes to stdout
    let mut output = std::io::stdout();
    if let Err(e) = strategy.process(&config, &args.input_file, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
