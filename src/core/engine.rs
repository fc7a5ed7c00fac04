//! Approval engine
//!
//! This module provides the `ApprovalEngine`, the only component external
//! callers interact with. It composes the approver registry and the
//! transfer ledger, validates caller authorization, and triggers the
//! external fund release when a request reaches quorum.
//!
//! The engine enforces business rules such as:
//! - Approver-only access to both creation and approval
//! - Validation before mutation (rejected calls leave no partial state)
//! - Exactly-once fund release per transfer request

use crate::core::ledger::TransferLedger;
use crate::core::registry::ApproverRegistry;
use crate::core::traits::FundRelease;
use crate::types::{
    AccountId, Amount, OperationRecord, OperationType, TransferId, TransferStatus, WalletError,
};

/// Quorum-based approval engine
///
/// Owns the registry, the ledger, and the injected fund-release
/// collaborator. All transfer state flows through this façade; callers
/// never touch the ledger directly.
#[derive(Debug)]
pub struct ApprovalEngine<R: FundRelease> {
    registry: ApproverRegistry,
    ledger: TransferLedger,
    releaser: R,
}

impl<R: FundRelease> ApprovalEngine<R> {
    /// Create an engine over a validated registry and a release collaborator
    ///
    /// # Arguments
    ///
    /// * `registry` - The fixed approver set and quorum threshold
    /// * `releaser` - The external fund-release capability
    ///
    /// # Returns
    ///
    /// A new ApprovalEngine with an empty ledger
    pub fn new(registry: ApproverRegistry, releaser: R) -> Self {
        ApprovalEngine {
            registry,
            ledger: TransferLedger::new(),
            releaser,
        }
    }

    /// Create a new transfer request
    ///
    /// No approval is auto-granted to the creator: creation and approval
    /// are independent acts, and the creator must separately call
    /// [`approve_transfer`](Self::approve_transfer) to count toward quorum.
    ///
    /// # Arguments
    ///
    /// * `amount` - Transfer amount in the smallest value unit
    /// * `to` - Recipient identity
    /// * `caller` - Verified identity of the requesting caller
    ///
    /// # Returns
    ///
    /// * `Ok(TransferId)` - The id assigned to the new request
    /// * `Err(WalletError)` - If the request was rejected
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The caller is not an approver
    /// - The amount is zero
    pub fn create_transfer(
        &mut self,
        amount: Amount,
        to: AccountId,
        caller: &AccountId,
    ) -> Result<TransferId, WalletError> {
        if !self.registry.is_approver(caller) {
            return Err(WalletError::unauthorized(caller));
        }

        self.ledger.append(amount, to)
    }

    /// Approve a pending transfer request
    ///
    /// On the approval that first reaches the quorum threshold the request
    /// is marked sent and the fund-release collaborator is invoked with the
    /// request's recipient and amount. The sent flag is set before release
    /// is attempted, so a release failure leaves the request terminal.
    ///
    /// # Arguments
    ///
    /// * `id` - The transfer to approve
    /// * `caller` - Verified identity of the approving caller
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the approval was recorded (and funds released when
    ///   quorum was reached)
    /// * `Err(WalletError)` if the approval was rejected
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The caller is not an approver
    /// - The id is unknown
    /// - The request has already been sent
    /// - The caller already approved this request
    /// - The fund release itself failed
    pub fn approve_transfer(
        &mut self,
        id: TransferId,
        caller: &AccountId,
    ) -> Result<(), WalletError> {
        if !self.registry.is_approver(caller) {
            return Err(WalletError::unauthorized(caller));
        }

        let approvals = self.ledger.record_approval(id, caller)?;

        if approvals >= self.registry.quorum() {
            // The sent transition precedes the release side effect
            self.ledger.mark_sent(id)?;

            let transfer = self.ledger.get(id)?;
            let (to, amount) = (transfer.to.clone(), transfer.amount);
            self.releaser.release(&to, amount)?;
        }

        Ok(())
    }

    /// Apply a single operation record from an input stream
    ///
    /// Routes the record to the appropriate typed operation, validating
    /// that the fields required by the operation are present.
    ///
    /// # Arguments
    ///
    /// * `record` - The operation record to apply
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the operation was applied successfully
    /// * `Err(WalletError)` if the operation failed
    pub fn apply(&mut self, record: OperationRecord) -> Result<(), WalletError> {
        match record.op_type {
            OperationType::Create => {
                let to = record
                    .to
                    .ok_or_else(|| WalletError::missing_field("create", &record.caller, "recipient"))?;
                let amount = record
                    .amount
                    .ok_or_else(|| WalletError::missing_field("create", &record.caller, "amount"))?;

                self.create_transfer(amount, to, &record.caller).map(|_| ())
            }
            OperationType::Approve => {
                let id = record.transfer.ok_or_else(|| {
                    WalletError::missing_field("approve", &record.caller, "transfer id")
                })?;

                self.approve_transfer(id, &record.caller)
            }
        }
    }

    /// Approver identities in construction order
    pub fn approvers(&self) -> &[AccountId] {
        self.registry.approvers()
    }

    /// The quorum threshold
    pub fn quorum(&self) -> usize {
        self.registry.quorum()
    }

    /// Status of every transfer request in creation order
    pub fn transfers(&self) -> Vec<TransferStatus> {
        self.ledger
            .transfers()
            .iter()
            .map(|transfer| transfer.status())
            .collect()
    }

    /// The fund-release collaborator
    ///
    /// Exposed read-only so callers can observe the effect of releases
    /// (balances, credits) without going around the engine.
    pub fn releaser(&self) -> &R {
        &self.releaser
    }
}
