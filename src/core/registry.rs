//! Approver registry
//!
//! This module provides the `ApproverRegistry` struct, the authoritative
//! source for approver membership and the quorum threshold. Both are fixed
//! at construction: the engine does not manage membership changes or key
//! rotation.
//!
//! The registry answers pure queries only; it owns no transfer state and
//! performs no side effects.

use crate::types::{AccountId, WalletError};
use std::collections::HashSet;

/// Fixed approver set and quorum threshold
///
/// Holds the approver identities in construction order plus a membership
/// index for O(1) authorization checks.
#[derive(Debug, Clone)]
pub struct ApproverRegistry {
    /// Approver identities in construction order
    approvers: Vec<AccountId>,

    /// Membership index over the same identities
    members: HashSet<AccountId>,

    /// Minimum number of distinct approvals required to release a transfer
    quorum: usize,
}

impl ApproverRegistry {
    /// Create a registry from an approver list and quorum threshold
    ///
    /// # Arguments
    ///
    /// * `approvers` - Approver identities; order is preserved
    /// * `quorum` - Minimum distinct approvals to release a transfer
    ///
    /// # Returns
    ///
    /// * `Ok(ApproverRegistry)` if the configuration is valid
    /// * `Err(WalletError::InvalidConfiguration)` otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The approver list is empty
    /// - The approver list contains duplicate identities
    /// - The quorum is zero or exceeds the number of approvers
    pub fn new(approvers: Vec<AccountId>, quorum: usize) -> Result<Self, WalletError> {
        if approvers.is_empty() {
            return Err(WalletError::invalid_configuration(
                "approver list is empty",
            ));
        }

        let members: HashSet<AccountId> = approvers.iter().cloned().collect();
        if members.len() != approvers.len() {
            return Err(WalletError::invalid_configuration(
                "approver list contains duplicates",
            ));
        }

        if quorum == 0 || quorum > approvers.len() {
            return Err(WalletError::InvalidConfiguration {
                reason: format!(
                    "quorum {} outside valid range [1, {}]",
                    quorum,
                    approvers.len()
                ),
            });
        }

        Ok(ApproverRegistry {
            approvers,
            members,
            quorum,
        })
    }

    /// Check whether an identity is an authorized approver
    ///
    /// Pure lookup, no side effects.
    pub fn is_approver(&self, identity: &str) -> bool {
        self.members.contains(identity)
    }

    /// Approver identities in construction order
    pub fn approvers(&self) -> &[AccountId] {
        &self.approvers
    }

    /// The quorum threshold
    pub fn quorum(&self) -> usize {
        self.quorum
    }
}
