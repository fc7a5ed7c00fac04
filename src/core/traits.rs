//! Core trait seams for the multisig engine
//!
//! This module defines the abstraction over the external fund-movement
//! collaborator. The engine calls exactly one external capability: moving
//! value to a recipient once a transfer request reaches quorum. Keeping it
//! behind a trait keeps the engine testable without any settlement system
//! present.

use crate::types::{AccountId, Amount, WalletError};

/// External fund-release capability
///
/// Invoked by the engine exactly once per transfer request, on the approval
/// that first reaches the quorum threshold. The request is already marked
/// sent when this is called; implementations own the actual value movement
/// and its settlement guarantees.
pub trait FundRelease {
    /// Move `amount` to `recipient`
    ///
    /// # Arguments
    ///
    /// * `recipient` - Identity to credit
    /// * `amount` - Amount in the smallest value unit
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the value was moved
    /// * `Err(WalletError)` if the release failed; the engine propagates
    ///   the error to the caller without unwinding the sent flag
    fn release(&mut self, recipient: &AccountId, amount: Amount) -> Result<(), WalletError>;
}
