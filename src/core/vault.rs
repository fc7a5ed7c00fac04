//! In-memory vault
//!
//! This module provides the `Vault` struct, an in-memory implementation of
//! the fund-release seam. It holds the single guarded balance the engine
//! protects and tracks per-recipient credited balances so callers and tests
//! can observe the effect of each release.
//!
//! A production deployment would implement [`FundRelease`] against a real
//! ledger or settlement system instead; the engine is indifferent.

use crate::core::traits::FundRelease;
use crate::types::{AccountId, Amount, WalletError};
use std::collections::HashMap;

/// In-memory guarded balance with per-recipient credits
///
/// The vault starts with the funding supplied at construction. Each release
/// debits the guarded balance and credits the recipient, using checked
/// arithmetic to maintain balance integrity.
#[derive(Debug, Default)]
pub struct Vault {
    /// Remaining guarded balance
    balance: Amount,

    /// Credited balances per recipient
    credits: HashMap<AccountId, Amount>,
}

impl Vault {
    /// Create a vault holding the given funding
    ///
    /// # Arguments
    ///
    /// * `funding` - Initial guarded balance in the smallest value unit
    pub fn new(funding: Amount) -> Self {
        Vault {
            balance: funding,
            credits: HashMap::new(),
        }
    }

    /// Remaining guarded balance
    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Total amount credited to a recipient so far
    ///
    /// Recipients that never received a release report zero.
    pub fn credited(&self, recipient: &str) -> Amount {
        self.credits.get(recipient).copied().unwrap_or(0)
    }
}

impl FundRelease for Vault {
    /// Move `amount` from the guarded balance to `recipient`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The guarded balance cannot cover the amount
    /// - Crediting the recipient would overflow
    fn release(&mut self, recipient: &AccountId, amount: Amount) -> Result<(), WalletError> {
        if self.balance < amount {
            return Err(WalletError::release_failed(
                recipient,
                amount,
                &format!("guarded balance is {}", self.balance),
            ));
        }

        let credited = self.credits.entry(recipient.clone()).or_insert(0);
        let new_credit = credited
            .checked_add(amount)
            .ok_or_else(|| WalletError::arithmetic_overflow("release", recipient))?;

        self.balance -= amount;
        *credited = new_credit;

        Ok(())
    }
}
