//! Synchronous processing strategy
//!
//! This module provides a synchronous, single-threaded implementation of
//! the ProcessingStrategy trait. It orchestrates operation processing by
//! coordinating between the SyncReader (for CSV input) and ApprovalEngine
//! (for business logic).
//!
//! # Design
//!
//! The SyncProcessingStrategy focuses on orchestration, delegating:
//! - CSV parsing to `SyncReader` (iterator interface)
//! - Operation processing to `ApprovalEngine` (business logic)
//! - CSV output to `csv_format::write_transfers_csv` (format handling)
//!
//! # Memory Efficiency
//!
//! Operation records are streamed one at a time; memory usage is
//! O(transfer requests), not O(all operations).

use crate::io::csv_format::write_transfers_csv;
use crate::io::sync_reader::SyncReader;
use crate::strategy::{ProcessingStrategy, WalletConfig};
use std::io::Write;
use std::path::Path;

/// Synchronous processing strategy
///
/// Implements the ProcessingStrategy trait using single-threaded,
/// synchronous processing. Orchestrates the flow between CSV reading,
/// the approval engine, and output generation.
///
/// # Examples
///
/// ```no_run
/// use rust_multisig_engine::strategy::{ProcessingStrategy, SyncProcessingStrategy, WalletConfig};
/// use std::path::Path;
/// use std::io;
///
/// let config = WalletConfig {
///     approvers: vec!["a0".to_string(), "a1".to_string(), "a2".to_string()],
///     quorum: 2,
///     funding: 10000,
/// };
/// let strategy = SyncProcessingStrategy;
/// let mut output = io::stdout();
///
/// strategy.process(&config, Path::new("operations.csv"), &mut output)
///     .expect("Processing failed");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncProcessingStrategy;

impl ProcessingStrategy for SyncProcessingStrategy {
    /// Process operations from input file and write results to output
    ///
    /// This method orchestrates the complete synchronous pipeline:
    /// 1. Builds an ApprovalEngine from the wallet configuration
    /// 2. Creates a SyncReader to stream operation records from the CSV file
    /// 3. Applies each record to the engine in file order
    /// 4. Writes the final transfer states using csv_format::write_transfers_csv
    ///
    /// # Error Handling
    ///
    /// Fatal errors (bad configuration, file not found, I/O errors) are
    /// returned immediately. Individual operation rejections are logged to
    /// stderr and processing continues.
    fn process(
        &self,
        config: &WalletConfig,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<(), String> {
        // Build the approval engine from the wallet configuration
        let mut engine = config.engine()?;

        // Create sync reader for streaming CSV input
        let reader = SyncReader::new(input_path)?;

        // Apply each operation record to the engine in file order
        for result in reader {
            match result {
                Ok(operation_record) => {
                    // Rejected operations leave no partial state; log and continue
                    if let Err(e) = engine.apply(operation_record) {
                        eprintln!("Operation rejected: {}", e);
                    }
                }
                Err(e) => {
                    // Log CSV parsing/conversion errors to stderr
                    eprintln!("CSV parsing error: {}", e);
                }
            }
        }

        // Write final transfer states to output
        write_transfers_csv(&engine.transfers(), output)?;

        Ok(())
    }
}
