//! Transfer-related types for the multisig engine
//!
//! This module defines transfer requests, their read-only status view, and
//! the operation records used to drive the engine from an input stream.

use super::account::{AccountId, Amount};
use std::collections::HashSet;

/// Transfer request identifier
///
/// Ids are dense and strictly increasing in creation order, starting at 0.
/// They are assigned by the ledger and never reused.
pub type TransferId = u64;

/// Operations accepted by the approval engine
///
/// Creation and approval are independent acts: creating a transfer grants
/// no approval to the creator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationType {
    /// Request a new transfer of funds to a recipient
    Create,

    /// Add the caller's approval to an existing transfer request
    ///
    /// The approval that first reaches the quorum threshold releases the
    /// funds and marks the request as sent.
    Approve,
}

/// Input operation record
///
/// Represents a single engine operation as read from the input stream.
/// The `to`/`amount` fields are only meaningful for create operations and
/// `transfer` only for approve operations; the conversion layer validates
/// presence per operation type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRecord {
    /// The operation to perform
    pub op_type: OperationType,

    /// Verified identity of the caller, supplied out-of-band by the
    /// authentication collaborator
    pub caller: AccountId,

    /// Recipient of the transfer (create only)
    pub to: Option<AccountId>,

    /// Transfer amount in the smallest value unit (create only)
    pub amount: Option<Amount>,

    /// Id of the transfer being approved (approve only)
    pub transfer: Option<TransferId>,
}

/// A transfer request tracked by the ledger
///
/// Requests are append-only: approvals accumulate one approver at a time
/// until the request is sent, after which the record is immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    /// Id assigned at creation, unique for the lifetime of the ledger
    pub id: TransferId,

    /// Amount to move when quorum is reached
    pub amount: Amount,

    /// Recipient of the funds
    pub to: AccountId,

    /// Distinct approver identities that have approved this request
    ///
    /// Membership uniqueness is the invariant that matters; duplicate
    /// detection is structural, not re-derived from a counter.
    pub approved_by: HashSet<AccountId>,

    /// Whether the funds have been released
    ///
    /// Transitions false to true exactly once, when the approval count
    /// first reaches the quorum threshold. Never reverts.
    pub sent: bool,
}

impl TransferRequest {
    /// Create a pending request with no approvals
    pub fn new(id: TransferId, amount: Amount, to: AccountId) -> Self {
        TransferRequest {
            id,
            amount,
            to,
            approved_by: HashSet::new(),
            sent: false,
        }
    }

    /// Number of distinct approvals collected so far
    pub fn approvals(&self) -> usize {
        self.approved_by.len()
    }

    /// Read-only status view of this request
    pub fn status(&self) -> TransferStatus {
        TransferStatus {
            id: self.id,
            amount: self.amount,
            to: self.to.clone(),
            approvals: self.approvals(),
            sent: self.sent,
        }
    }
}

/// Read-only view of a transfer request
///
/// This is the shape exposed to caller-facing collaborators (CLI, RPC) and
/// serialized to the output CSV: approvals are reduced to a count, the
/// approver set itself stays internal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferStatus {
    /// Transfer id
    pub id: TransferId,

    /// Transfer amount in the smallest value unit
    pub amount: Amount,

    /// Recipient of the funds
    pub to: AccountId,

    /// Number of distinct approvals collected
    pub approvals: usize,

    /// Whether the funds have been released
    pub sent: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_request_is_pending() {
        let request = TransferRequest::new(0, 100, "recipient".to_string());

        assert_eq!(request.id, 0);
        assert_eq!(request.amount, 100);
        assert_eq!(request.approvals(), 0);
        assert!(!request.sent);
    }

    #[test]
    fn test_status_reduces_approvals_to_count() {
        let mut request = TransferRequest::new(3, 250, "recipient".to_string());
        request.approved_by.insert("a0".to_string());
        request.approved_by.insert("a1".to_string());

        let status = request.status();
        assert_eq!(status.id, 3);
        assert_eq!(status.amount, 250);
        assert_eq!(status.to, "recipient");
        assert_eq!(status.approvals, 2);
        assert!(!status.sent);
    }
}
