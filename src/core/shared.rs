//! Thread-safe engine handle
//!
//! This module provides the `SharedApprovalEngine` struct, a cloneable
//! handle that lets concurrent callers drive one underlying engine.
//!
//! # Serializability
//!
//! The reference semantics execute one mutating call at a time to
//! completion. Transfer ids are dense and quorum fires exactly once, so
//! operations cannot be partitioned the way independent per-account
//! workloads can: every call, read or write, takes the single engine lock,
//! giving all callers one global linearizable order.
//!
//! No operation blocks indefinitely: fund release is synchronous and the
//! lock is only held for the duration of one call.

use crate::core::engine::ApprovalEngine;
use crate::core::traits::FundRelease;
use crate::types::{
    AccountId, Amount, OperationRecord, TransferId, TransferStatus, WalletError,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle to a mutex-guarded approval engine
///
/// Every clone refers to the same engine; dropping the last clone drops
/// the engine.
#[derive(Debug)]
pub struct SharedApprovalEngine<R: FundRelease> {
    inner: Arc<Mutex<ApprovalEngine<R>>>,
}

impl<R: FundRelease> Clone for SharedApprovalEngine<R> {
    fn clone(&self) -> Self {
        SharedApprovalEngine {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: FundRelease> SharedApprovalEngine<R> {
    /// Wrap an engine for shared use
    pub fn new(engine: ApprovalEngine<R>) -> Self {
        SharedApprovalEngine {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Take the engine lock
    ///
    /// A panic while holding the lock poisons the mutex; the engine state
    /// itself is still consistent (every operation validates before
    /// mutating), so the poison flag is cleared rather than propagated.
    fn lock(&self) -> MutexGuard<'_, ApprovalEngine<R>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create a new transfer request
    ///
    /// See [`ApprovalEngine::create_transfer`].
    pub fn create_transfer(
        &self,
        amount: Amount,
        to: AccountId,
        caller: &AccountId,
    ) -> Result<TransferId, WalletError> {
        self.lock().create_transfer(amount, to, caller)
    }

    /// Approve a pending transfer request
    ///
    /// See [`ApprovalEngine::approve_transfer`].
    pub fn approve_transfer(&self, id: TransferId, caller: &AccountId) -> Result<(), WalletError> {
        self.lock().approve_transfer(id, caller)
    }

    /// Apply a single operation record
    ///
    /// See [`ApprovalEngine::apply`].
    pub fn apply(&self, record: OperationRecord) -> Result<(), WalletError> {
        self.lock().apply(record)
    }

    /// Approver identities in construction order
    pub fn approvers(&self) -> Vec<AccountId> {
        self.lock().approvers().to_vec()
    }

    /// The quorum threshold
    pub fn quorum(&self) -> usize {
        self.lock().quorum()
    }

    /// Status of every transfer request in creation order
    pub fn transfers(&self) -> Vec<TransferStatus> {
        self.lock().transfers()
    }

    /// Run a closure against the fund-release collaborator
    ///
    /// Used to observe balances after processing without cloning the
    /// collaborator out of the lock.
    pub fn with_releaser<T>(&self, f: impl FnOnce(&R) -> T) -> T {
        f(self.lock().releaser())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::ApproverRegistry;
    use crate::core::vault::Vault;
    use std::thread;

    fn shared_engine() -> SharedApprovalEngine<Vault> {
        let approvers = vec!["a0".to_string(), "a1".to_string(), "a2".to_string()];
        let registry = ApproverRegistry::new(approvers, 2).unwrap();
        SharedApprovalEngine::new(ApprovalEngine::new(registry, Vault::new(10000)))
    }

    #[test]
    fn test_clones_share_state() {
        let engine = shared_engine();
        let clone = engine.clone();

        engine
            .create_transfer(100, "recipient".to_string(), &"a0".to_string())
            .unwrap();

        assert_eq!(clone.transfers().len(), 1);
    }

    #[test]
    fn test_quorum_fires_once_across_threads() {
        let engine = shared_engine();
        engine
            .create_transfer(100, "recipient".to_string(), &"a0".to_string())
            .unwrap();

        // Two distinct approvers race; exactly one approval is the one
        // that reaches quorum, and exactly one release happens.
        let handles: Vec<_> = ["a0", "a1"]
            .into_iter()
            .map(|approver| {
                let engine = engine.clone();
                thread::spawn(move || engine.approve_transfer(0, &approver.to_string()))
            })
            .collect();

        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        let transfers = engine.transfers();
        assert_eq!(transfers[0].approvals, 2);
        assert!(transfers[0].sent);
        assert_eq!(engine.with_releaser(|vault| vault.credited("recipient")), 100);
        assert_eq!(engine.with_releaser(|vault| vault.balance()), 9900);
    }

    #[test]
    fn test_duplicate_approvals_race_to_one_winner() {
        let engine = shared_engine();
        engine
            .create_transfer(100, "recipient".to_string(), &"a0".to_string())
            .unwrap();

        // The same approver from two threads: exactly one call wins.
        let handles: Vec<_> = (0..2)
            .map(|_| {
                let engine = engine.clone();
                thread::spawn(move || engine.approve_transfer(0, &"a0".to_string()))
            })
            .collect();

        let results: Vec<_> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();

        let accepted = results.iter().filter(|result| result.is_ok()).count();
        assert_eq!(accepted, 1);
        assert_eq!(engine.transfers()[0].approvals, 1);
    }
}
