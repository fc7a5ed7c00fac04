use crate::strategy::{BatchConfig, WalletConfig};
use crate::types::{AccountId, Amount};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Process multisig wallet operations with quorum-gated fund release
#[derive(Parser, Debug)]
#[command(name = "multisig-engine")]
#[command(about = "Process multisig wallet operations with quorum-gated fund release", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing operation records
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Authorized approver identities
    #[arg(
        long = "approvers",
        value_name = "IDS",
        value_delimiter = ',',
        required = true,
        help = "Comma-separated approver identities (fixed for the run)"
    )]
    pub approvers: Vec<AccountId>,

    /// Quorum threshold
    #[arg(
        long = "quorum",
        value_name = "COUNT",
        help = "Minimum distinct approvals required to release a transfer"
    )]
    pub quorum: usize,

    /// Initial guarded balance
    #[arg(
        long = "funding",
        value_name = "AMOUNT",
        default_value = "0",
        help = "Initial guarded balance in the smallest value unit"
    )]
    pub funding: Amount,

    /// Processing strategy to use
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "async",
        help = "Processing strategy: 'sync' for synchronous or 'async' for asynchronous"
    )]
    pub strategy: StrategyType,

    /// Number of operation records per read batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of operation records per read batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,
}

/// Available processing strategies
#[derive(Clone, Debug, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

impl CliArgs {
    /// Create a WalletConfig from CLI arguments
    ///
    /// Validation of the approver set and quorum happens when the engine
    /// is constructed, so a bad configuration is reported once with the
    /// exact rule that was violated.
    ///
    /// # Returns
    ///
    /// A `WalletConfig` with the approver set, quorum, and funding.
    pub fn to_wallet_config(&self) -> WalletConfig {
        WalletConfig {
            approvers: self.approvers.clone(),
            quorum: self.quorum,
            funding: self.funding,
        }
    }

    /// Create a BatchConfig from CLI arguments
    ///
    /// Uses the provided batch size or falls back to the default. Zero
    /// values are rejected with a warning to stderr.
    ///
    /// # Returns
    ///
    /// A `BatchConfig` with the value from CLI arguments or the default.
    pub fn to_batch_config(&self) -> BatchConfig {
        match self.batch_size {
            Some(batch_size) => BatchConfig::new(batch_size),
            None => BatchConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const BASE: &[&str] = &["program", "--approvers", "a0,a1,a2", "--quorum", "2", "input.csv"];

    fn with_args(extra: &[&str]) -> Vec<String> {
        let mut args: Vec<String> = BASE.iter().map(|s| s.to_string()).collect();
        let input = args.pop().unwrap();
        args.extend(extra.iter().map(|s| s.to_string()));
        args.push(input);
        args
    }

    #[test]
    fn test_approvers_parsed_from_comma_list() {
        let parsed = CliArgs::try_parse_from(BASE).unwrap();
        assert_eq!(parsed.approvers, vec!["a0", "a1", "a2"]);
        assert_eq!(parsed.quorum, 2);
        assert_eq!(parsed.funding, 0);
    }

    // Strategy parsing tests
    #[rstest]
    #[case::default_strategy(&[], StrategyType::Async)]
    #[case::explicit_sync(&["--strategy", "sync"], StrategyType::Sync)]
    #[case::explicit_async(&["--strategy", "async"], StrategyType::Async)]
    fn test_strategy_parsing(#[case] extra: &[&str], #[case] expected: StrategyType) {
        let parsed = CliArgs::try_parse_from(with_args(extra)).unwrap();
        match (&parsed.strategy, &expected) {
            (StrategyType::Sync, StrategyType::Sync) => (),
            (StrategyType::Async, StrategyType::Async) => (),
            _ => panic!("Expected {:?}, got {:?}", expected, parsed.strategy),
        }
    }

    #[rstest]
    #[case::default_funding(&[], 0)]
    #[case::custom_funding(&["--funding", "10000"], 10000)]
    fn test_funding_parsing(#[case] extra: &[&str], #[case] expected: Amount) {
        let parsed = CliArgs::try_parse_from(with_args(extra)).unwrap();
        assert_eq!(parsed.funding, expected);
    }

    #[test]
    fn test_wallet_config_conversion() {
        let parsed = CliArgs::try_parse_from(with_args(&["--funding", "500"])).unwrap();
        let config = parsed.to_wallet_config();

        assert_eq!(config.approvers, vec!["a0", "a1", "a2"]);
        assert_eq!(config.quorum, 2);
        assert_eq!(config.funding, 500);
    }

    // BatchConfig conversion tests
    #[rstest]
    #[case::default_batch_size(&[], 1000)]
    #[case::custom_batch_size(&["--batch-size", "200"], 200)]
    #[case::zero_falls_back(&["--batch-size", "0"], 1000)]
    fn test_batch_config_conversion(#[case] extra: &[&str], #[case] expected: usize) {
        let parsed = CliArgs::try_parse_from(with_args(extra)).unwrap();
        assert_eq!(parsed.to_batch_config().batch_size, expected);
    }

    // Error handling tests
    #[rstest]
    #[case::missing_input(&["program", "--approvers", "a0", "--quorum", "1"])]
    #[case::missing_approvers(&["program", "--quorum", "1", "input.csv"])]
    #[case::missing_quorum(&["program", "--approvers", "a0", "input.csv"])]
    #[case::invalid_strategy(&["program", "--approvers", "a0", "--quorum", "1", "--strategy", "parallel", "input.csv"])]
    #[case::negative_funding(&["program", "--approvers", "a0", "--quorum", "1", "--funding", "-5", "input.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
