//! Processing strategy module for wallet operation processing
//!
//! This module defines the Strategy pattern for complete operation
//! processing pipelines, encompassing CSV parsing, the approval engine,
//! and output generation. This allows different processing implementations
//! (synchronous, asynchronous) to be selected at runtime.

use crate::cli::StrategyType;
use crate::core::{ApprovalEngine, ApproverRegistry, Vault};
use crate::types::{AccountId, Amount};
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Wallet configuration shared by all strategies
///
/// Carries everything needed to construct the engine: the fixed approver
/// set, the quorum threshold, and the funding held by the vault.
#[derive(Debug, Clone)]
pub struct WalletConfig {
    /// Approver identities in declaration order
    pub approvers: Vec<AccountId>,
    /// Minimum distinct approvals to release a transfer
    pub quorum: usize,
    /// Initial guarded balance
    pub funding: Amount,
}

impl WalletConfig {
    /// Build an approval engine over an in-memory vault
    ///
    /// # Returns
    ///
    /// * `Ok(ApprovalEngine)` if the approver set and quorum are valid
    /// * `Err(String)` describing the configuration problem otherwise
    pub fn engine(&self) -> Result<ApprovalEngine<Vault>, String> {
        let registry = ApproverRegistry::new(self.approvers.clone(), self.quorum)
            .map_err(|e| e.to_string())?;
        Ok(ApprovalEngine::new(registry, Vault::new(self.funding)))
    }
}

/// Processing strategy trait for complete operation processing pipelines
///
/// This trait defines the interface for different processing
/// implementations. Each strategy must be able to read operation records
/// from a CSV file, drive them through the approval engine, and write the
/// final transfer states to output.
pub trait ProcessingStrategy: Send + Sync {
    /// Process operations from input file and write results to output
    ///
    /// This method builds an engine from the wallet configuration, reads
    /// operation records from the specified CSV file, applies them in file
    /// order, and writes the final transfer states to the provided output
    /// writer.
    ///
    /// # Arguments
    ///
    /// * `config` - Wallet configuration (approvers, quorum, funding)
    /// * `input_path` - Path to the input CSV file containing operations
    /// * `output` - Mutable reference to a writer for the transfer states
    ///
    /// # Returns
    ///
    /// * `Ok(())` if all processing completed (possibly with rejected
    ///   records)
    /// * `Err(String)` if a fatal error occurred (bad configuration, file
    ///   not found, I/O error)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The wallet configuration is invalid
    /// - The input file cannot be opened
    /// - A fatal I/O error occurs during reading or writing
    ///
    /// Individual operation rejections (unauthorized caller, duplicate
    /// approval, etc.) are logged to stderr but do not abort processing:
    /// each rejected call leaves no partial state, so the stream continues
    /// with the next record.
    fn process(
        &self,
        config: &WalletConfig,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<(), String>;
}

/// Create a processing strategy based on the specified strategy type
///
/// This factory function selects and instantiates the appropriate
/// processing strategy implementation at runtime based on the provided
/// strategy type and optional batch configuration.
///
/// # Arguments
///
/// * `strategy_type` - The type of processing strategy to create (Sync or Async)
/// * `config` - Optional configuration for async batch reading (ignored for sync)
///
/// # Returns
///
/// A boxed trait object implementing the ProcessingStrategy trait
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<BatchConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config))
        }
    }
}
