//! Per-creator earnings vault.

use crate::error::VaultError;
use serde::{Deserialize, Serialize};
use tollgate_types::{AccountId, Value, VaultId};

/// A creator's accumulated earnings.
///
/// Created lazily on the creator's first content registration and kept for
/// the lifetime of the platform. Credited by settlement from any of the
/// creator's sessions; debited only by the creator's withdrawal.
#[derive(Debug, Serialize, Deserialize)]
pub struct Vault {
    pub id: VaultId,
    pub creator: AccountId,
    /// Settled earnings not yet withdrawn.
    pub balance: Value,
    /// Lifetime earnings ever credited (never decreases).
    pub total_credited: u128,
}

impl Vault {
    pub fn new(id: VaultId, creator: AccountId) -> Self {
        Self {
            id,
            creator,
            balance: Value::zero(),
            total_credited: 0,
        }
    }

    /// Credit settled earnings into the vault.
    ///
    /// Unconditional — only the settlement engine calls this, and a vault
    /// never refuses earnings.
    pub fn credit(&mut self, payment: Value) {
        self.total_credited = self.total_credited.saturating_add(payment.value());
        self.balance.join(payment);
    }

    /// Withdraw earnings. `amount == 0` withdraws everything available.
    ///
    /// Creator-only; the withdrawn value is handed back to the caller for
    /// transfer out of the system.
    pub fn withdraw(&mut self, caller: &AccountId, amount: u128) -> Result<Value, VaultError> {
        if *caller != self.creator {
            return Err(VaultError::NotCreator);
        }
        if amount == 0 {
            return Ok(self.balance.take_all());
        }
        let available = self.balance.value();
        self.balance
            .split(amount)
            .map_err(|_| VaultError::InsufficientBalance {
                needed: amount,
                available,
            })
    }
}
