//! Asynchronous processing strategy
//!
//! This module provides an asynchronous implementation of the
//! ProcessingStrategy trait. Operation records are read in batches with
//! non-blocking file I/O and applied to a shared engine handle.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (batch_size)
//!     ├── AsyncReader (batched CSV reading)
//!     └── SharedApprovalEngine (mutex-guarded engine)
//! ```
//!
//! # Ordering
//!
//! Approval operations share one ledger and one id counter, so records are
//! applied strictly in file order: batching accelerates the read side, the
//! apply side stays a single serial history. The SharedApprovalEngine
//! handle makes that history linearizable for any additional callers.

use crate::core::SharedApprovalEngine;
use crate::io::async_reader::AsyncReader;
use crate::io::csv_format::write_transfers_csv;
use crate::strategy::{ProcessingStrategy, WalletConfig};
use std::io::Write;
use std::path::Path;

/// Configuration for batched async reading
///
/// Controls how many operation records are pulled from the reader per
/// batch before being applied to the engine.
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Number of operation records per batch
    pub batch_size: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { batch_size: 1000 }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig with a custom batch size
    pub fn new(batch_size: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            eprintln!(
                "Warning: Invalid batch_size ({}), using default ({})",
                batch_size, default.batch_size
            );
            default.batch_size
        } else {
            batch_size
        };

        Self { batch_size }
    }
}

/// Asynchronous processing strategy
///
/// Implements the ProcessingStrategy trait using async batch reading over
/// a shared engine handle. Reading is non-blocking; application preserves
/// the serial operation order the engine's invariants require.
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    /// Batch reading configuration
    config: BatchConfig,
}

impl AsyncProcessingStrategy {
    /// Create a new AsyncProcessingStrategy with the specified configuration
    ///
    /// # Arguments
    ///
    /// * `config` - BatchConfig with the batch size
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    /// Process operations from input file and write results to output
    ///
    /// This method implements the complete asynchronous pipeline:
    /// 1. Builds a SharedApprovalEngine from the wallet configuration
    /// 2. Creates a tokio multi-threaded runtime
    /// 3. Opens the CSV file with non-blocking I/O
    /// 4. Reads operations in batches using AsyncReader
    /// 5. Applies each batch in file order through the shared handle
    /// 6. Writes the final transfer states to output
    ///
    /// # Error Handling
    ///
    /// Fatal errors (bad configuration, file not found, runtime errors)
    /// are returned immediately. Individual operation rejections are
    /// logged to stderr and processing continues.
    fn process(
        &self,
        config: &WalletConfig,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<(), String> {
        // Build the shared engine handle from the wallet configuration
        let engine = SharedApprovalEngine::new(config.engine()?);

        // Create tokio runtime for async execution
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| format!("Failed to create tokio runtime: {}", e))?;

        // Execute async processing within the runtime
        runtime.block_on(async {
            // Open the CSV file
            let file = tokio::fs::File::open(input_path)
                .await
                .map_err(|e| format!("Failed to open file '{}': {}", input_path.display(), e))?;

            // Wrap tokio file in a compatibility layer for csv-async
            let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);

            // Create async CSV reader
            let mut reader = AsyncReader::new(compat_file);

            // Read batches until end of file; apply records in file order
            loop {
                let batch = reader.read_batch(self.config.batch_size).await;

                // If batch is empty, we've reached end of file
                if batch.is_empty() {
                    break;
                }

                for operation_record in batch {
                    if let Err(e) = engine.apply(operation_record) {
                        eprintln!("Operation rejected: {}", e);
                    }
                }
            }

            // Write final transfer states to output
            write_transfers_csv(&engine.transfers(), output)?;

            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn config() -> WalletConfig {
        WalletConfig {
            approvers: vec!["a0".to_string(), "a1".to_string(), "a2".to_string()],
            quorum: 2,
            funding: 10000,
        }
    }

    #[test]
    fn test_async_strategy_reaches_quorum() {
        let csv_content = "op,caller,to,amount,transfer\n\
                           create,a0,recipient,100,\n\
                           approve,a0,,,0\n\
                           approve,a1,,,0\n";
        let file = create_temp_csv(csv_content);

        let strategy = AsyncProcessingStrategy::new(BatchConfig::default());
        let mut output = Vec::new();

        let result = strategy.process(&config(), file.path(), &mut output);
        assert!(result.is_ok());

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(
            output_str,
            "id,amount,to,approvals,sent\n0,100,recipient,2,true\n"
        );
    }

    #[rstest]
    #[case::batch_of_one(1)]
    #[case::batch_of_two(2)]
    #[case::large_batch(1000)]
    fn test_async_strategy_order_independent_of_batch_size(#[case] batch_size: usize) {
        // The approve of transfer 1 only succeeds if both creates were
        // applied first, whatever the batch boundaries
        let csv_content = "op,caller,to,amount,transfer\n\
                           create,a0,r0,100,\n\
                           create,a1,r1,200,\n\
                           approve,a2,,,1\n";
        let file = create_temp_csv(csv_content);

        let strategy = AsyncProcessingStrategy::new(BatchConfig::new(batch_size));
        let mut output = Vec::new();

        strategy
            .process(&config(), file.path(), &mut output)
            .unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(
            output_str,
            "id,amount,to,approvals,sent\n0,100,r0,0,false\n1,200,r1,1,false\n"
        );
    }

    #[test]
    fn test_async_strategy_invalid_configuration_is_fatal() {
        let file = create_temp_csv("op,caller,to,amount,transfer\n");

        let bad_config = WalletConfig {
            approvers: vec![],
            quorum: 1,
            funding: 0,
        };

        let strategy = AsyncProcessingStrategy::new(BatchConfig::default());
        let mut output = Vec::new();

        let result = strategy.process(&bad_config, file.path(), &mut output);
        assert!(result.is_err());
    }

    #[test]
    fn test_async_strategy_missing_file_is_fatal() {
        let strategy = AsyncProcessingStrategy::new(BatchConfig::default());
        let mut output = Vec::new();

        let result = strategy.process(&config(), Path::new("does/not/exist.csv"), &mut output);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Failed to open file"));
    }

    #[test]
    fn test_batch_config_zero_falls_back_to_default() {
        let config = BatchConfig::new(0);
        assert_eq!(config.batch_size, BatchConfig::default().batch_size);
    }
}
