//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: identity and amount types
//! - `transfer`: transfer requests and operation records
//! - `error`: error types for the multisig engine

pub mod account;
pub mod error;
pub mod transfer;

pub use account::{AccountId, Amount};
pub use error::WalletError;
pub use transfer::{OperationRecord, OperationType, TransferId, TransferRequest, TransferStatus};
