//! Transfer ledger
//!
//! This module provides the `TransferLedger` component that owns the
//! ordered collection of transfer requests and all mutation of their
//! records. The ledger enforces the per-request invariants (no approval
//! after sent, no duplicate approval, sent fires at most once) but not
//! caller authorization, which is the engine's job.
//!
//! # Id Assignment
//!
//! Ids are dense and strictly increasing in creation order, starting at 0.
//! Requests are never deleted, so a request's id doubles as its position
//! in the collection.

use crate::types::{AccountId, Amount, TransferId, TransferRequest, WalletError};

/// Append-only store of transfer requests
///
/// Maintains requests in creation order. Supports appending new requests,
/// recording approvals, and marking requests as sent.
#[derive(Debug, Default)]
pub struct TransferLedger {
    /// Requests in creation order; index == id
    transfers: Vec<TransferRequest>,
}

impl TransferLedger {
    /// Create a new empty ledger
    ///
    /// # Returns
    ///
    /// A new TransferLedger with no requests
    pub fn new() -> Self {
        TransferLedger {
            transfers: Vec::new(),
        }
    }

    /// Append a new transfer request
    ///
    /// The request starts with no approvals and `sent = false`.
    ///
    /// # Arguments
    ///
    /// * `amount` - Transfer amount in the smallest value unit
    /// * `to` - Recipient identity
    ///
    /// # Returns
    ///
    /// * `Ok(TransferId)` - The id assigned to the new request
    /// * `Err(WalletError::InvalidAmount)` - If the amount is zero
    pub fn append(&mut self, amount: Amount, to: AccountId) -> Result<TransferId, WalletError> {
        if amount == 0 {
            return Err(WalletError::invalid_amount(amount));
        }

        let id = self.transfers.len() as TransferId;
        self.transfers.push(TransferRequest::new(id, amount, to));
        Ok(id)
    }

    /// Get a transfer request by id
    ///
    /// # Arguments
    ///
    /// * `id` - The transfer id to look up
    ///
    /// # Returns
    ///
    /// * `Ok(&TransferRequest)` - If the request exists
    /// * `Err(WalletError::NotFound)` - If the id is unknown
    pub fn get(&self, id: TransferId) -> Result<&TransferRequest, WalletError> {
        self.transfers
            .get(id as usize)
            .ok_or_else(|| WalletError::not_found(id))
    }

    /// Record an approval on a pending request
    ///
    /// Validation happens before any mutation: a terminal request and a
    /// repeated approver both leave the record untouched.
    ///
    /// # Arguments
    ///
    /// * `id` - The transfer to approve
    /// * `approver` - The approver identity to record
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - The new number of distinct approvals
    /// * `Err(WalletError)` - If the approval was rejected
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The id is unknown
    /// - The request has already been sent
    /// - The approver already approved this request
    pub fn record_approval(
        &mut self,
        id: TransferId,
        approver: &AccountId,
    ) -> Result<usize, WalletError> {
        let transfer = self
            .transfers
            .get_mut(id as usize)
            .ok_or_else(|| WalletError::not_found(id))?;

        if transfer.sent {
            return Err(WalletError::already_sent(id));
        }

        if transfer.approved_by.contains(approver) {
            return Err(WalletError::duplicate_approval(id, approver));
        }

        transfer.approved_by.insert(approver.clone());
        Ok(transfer.approvals())
    }

    /// Mark a request as sent
    ///
    /// Guard only: callers must already have determined from
    /// `record_approval`'s return value that quorum is newly reached.
    ///
    /// # Arguments
    ///
    /// * `id` - The transfer to mark
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the flag transitioned false to true
    /// * `Err(WalletError)` - If the id is unknown or the request was
    ///   already sent
    pub fn mark_sent(&mut self, id: TransferId) -> Result<(), WalletError> {
        let transfer = self
            .transfers
            .get_mut(id as usize)
            .ok_or_else(|| WalletError::not_found(id))?;

        if transfer.sent {
            return Err(WalletError::already_sent(id));
        }

        transfer.sent = true;
        Ok(())
    }

    /// All requests in creation order
    pub fn transfers(&self) -> &[TransferRequest] {
        &self.transfers
    }

    /// Number of requests ever created
    pub fn len(&self) -> usize {
        self.transfers.len()
    }

    /// Whether no request has been created yet
    pub fn is_empty(&self) -> bool {
        self.transfers.is_empty()
    }
}
