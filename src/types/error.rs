//! Error types for the multisig engine
//!
//! This module defines all error types that can occur while processing
//! wallet operations. Errors are designed to be descriptive and
//! user-friendly for CLI output: every rejection names the exact rule the
//! caller violated.
//!
//! # Error Categories
//!
//! - **Configuration Errors**: invalid approver set or quorum threshold
//! - **Authorization Errors**: callers outside the approver set
//! - **Request Errors**: unknown ids, terminal requests, duplicate approvals
//! - **Release Errors**: the fund-release collaborator could not move value
//! - **File I/O and CSV Errors**: unreadable input, malformed records

use super::account::{AccountId, Amount};
use super::transfer::TransferId;
use thiserror::Error;

/// Main error type for the multisig engine
///
/// This enum represents all possible errors that can occur while creating
/// and approving transfers. Each variant includes relevant context to help
/// diagnose and resolve the issue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// Invalid construction parameters for the approver registry
    ///
    /// This is a fatal error: the engine refuses to start with a bad
    /// approver set or quorum threshold.
    #[error("Invalid wallet configuration: {reason}")]
    InvalidConfiguration {
        /// Description of the configuration problem
        reason: String,
    },

    /// Caller is not a member of the approver set
    ///
    /// Both creating and approving transfers require approver status.
    /// The operation is rejected with no mutation.
    #[error("Only approvers are allowed: account '{caller}' is not an approver")]
    Unauthorized {
        /// The rejected caller identity
        caller: AccountId,
    },

    /// Unknown transfer id
    ///
    /// The referenced request does not exist in the ledger.
    #[error("Transfer {id} not found")]
    NotFound {
        /// The id that was not found
        id: TransferId,
    },

    /// The transfer has already been sent
    ///
    /// Sent requests are terminal: no further approvals are accepted and
    /// funds are never released twice.
    #[error("Transfer {id} has already been sent")]
    AlreadySent {
        /// Id of the terminal request
        id: TransferId,
    },

    /// The caller already approved this transfer
    ///
    /// Each approver counts toward quorum at most once per request.
    #[error("Account '{approver}' cannot approve transfer {id} twice")]
    DuplicateApproval {
        /// Id of the request
        id: TransferId,
        /// The approver that already approved
        approver: AccountId,
    },

    /// Transfer amount is not positive
    ///
    /// Amounts are integral smallest-unit values; zero-value transfers are
    /// rejected at creation.
    #[error("Invalid transfer amount: {amount} (must be positive)")]
    InvalidAmount {
        /// The rejected amount
        amount: Amount,
    },

    /// A required field is missing for the operation
    ///
    /// Create operations require a recipient and an amount; approve
    /// operations require a transfer id. This is a recoverable error -
    /// the record is skipped.
    #[error("{op} operation by '{caller}' requires a {field}")]
    MissingField {
        /// Operation name
        op: String,
        /// Caller identity from the record
        caller: AccountId,
        /// Name of the missing field
        field: String,
    },

    /// The fund-release collaborator could not move the value
    ///
    /// The request is already terminal when this is raised: the sent flag
    /// is set before release is invoked.
    #[error("Failed to release {amount} to '{recipient}': {message}")]
    ReleaseFailed {
        /// Intended recipient
        recipient: AccountId,
        /// Amount that could not be moved
        amount: Amount,
        /// Description of the release failure
        message: String,
    },

    /// Arithmetic overflow would occur
    ///
    /// The operation is rejected to maintain balance integrity.
    #[error("Arithmetic overflow in {operation} for account '{account}'")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account involved
        account: AccountId,
    },

    /// I/O error occurred while reading or writing files
    ///
    /// This is typically a fatal error (file permissions, disk full, etc.).
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// This is a recoverable error - the malformed record is skipped and
    /// processing continues with the next record.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

// Conversion from io::Error to WalletError
impl From<std::io::Error> for WalletError {
    fn from(error: std::io::Error) -> Self {
        WalletError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to WalletError
impl From<csv::Error> for WalletError {
    fn from(error: csv::Error) -> Self {
        // Extract line number if available
        let line = error.position().map(|pos| pos.line());

        WalletError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl WalletError {
    /// Create an InvalidConfiguration error
    pub fn invalid_configuration(reason: &str) -> Self {
        WalletError::InvalidConfiguration {
            reason: reason.to_string(),
        }
    }

    /// Create an Unauthorized error
    pub fn unauthorized(caller: &str) -> Self {
        WalletError::Unauthorized {
            caller: caller.to_string(),
        }
    }

    /// Create a NotFound error
    pub fn not_found(id: TransferId) -> Self {
        WalletError::NotFound { id }
    }

    /// Create an AlreadySent error
    pub fn already_sent(id: TransferId) -> Self {
        WalletError::AlreadySent { id }
    }

    /// Create a DuplicateApproval error
    pub fn duplicate_approval(id: TransferId, approver: &str) -> Self {
        WalletError::DuplicateApproval {
            id,
            approver: approver.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Amount) -> Self {
        WalletError::InvalidAmount { amount }
    }

    /// Create a MissingField error
    pub fn missing_field(op: &str, caller: &str, field: &str) -> Self {
        WalletError::MissingField {
            op: op.to_string(),
            caller: caller.to_string(),
            field: field.to_string(),
        }
    }

    /// Create a ReleaseFailed error
    pub fn release_failed(recipient: &str, amount: Amount, message: &str) -> Self {
        WalletError::ReleaseFailed {
            recipient: recipient.to_string(),
            amount,
            message: message.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: &str) -> Self {
        WalletError::ArithmeticOverflow {
            operation: operation.to_string(),
            account: account.to_string(),
        }
    }
}
