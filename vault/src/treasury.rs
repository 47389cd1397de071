//! Platform listing-fee treasury.

use crate::error::VaultError;
use serde::{Deserialize, Serialize};
use tollgate_types::{AccountId, Value};

/// The platform's one-time listing-fee accumulator.
///
/// Credited once per content registration when the configured fee is
/// nonzero; debited only by the platform admin.
#[derive(Debug, Serialize, Deserialize)]
pub struct PlatformTreasury {
    pub admin: AccountId,
    /// Configured listing fee in raw units. Zero disables collection.
    pub listing_fee: u128,
    pub balance: Value,
}

impl PlatformTreasury {
    pub fn new(admin: AccountId, listing_fee: u128) -> Self {
        Self {
            admin,
            listing_fee,
            balance: Value::zero(),
        }
    }

    /// Collect the configured listing fee from `payment`, leaving any
    /// excess with the payer. Returns the amount collected.
    ///
    /// With a zero configured fee the payment is left untouched. The
    /// treasury never retains more than the configured fee.
    pub fn collect_listing_fee(&mut self, payment: &mut Value) -> Result<u128, VaultError> {
        if self.listing_fee == 0 {
            return Ok(0);
        }
        let available = payment.value();
        let fee = payment
            .split(self.listing_fee)
            .map_err(|_| VaultError::InsufficientListingFee {
                needed: self.listing_fee,
                available,
            })?;
        self.balance.join(fee);
        Ok(self.listing_fee)
    }

    /// Withdraw collected fees. `amount == 0` withdraws everything.
    pub fn withdraw(&mut self, caller: &AccountId, amount: u128) -> Result<Value, VaultError> {
        if *caller != self.admin {
            return Err(VaultError::NotAdmin);
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

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> AccountId {
        AccountId::new("toll_admin")
    }

    #[test]
    fn collects_exact_fee_and_leaves_excess() {
        let mut treasury = PlatformTreasury::new(admin(), 500);
        let mut payment = Value::new(800);
        let collected = treasury.collect_listing_fee(&mut payment).unwrap();
        assert_eq!(collected, 500);
        assert_eq!(treasury.balance.value(), 500);
        // The 300 excess stays with the payer.
        assert_eq!(payment.value(), 300);
    }

    #[test]
    fn zero_fee_takes_nothing() {
        let mut treasury = PlatformTreasury::new(admin(), 0);
        let mut payment = Value::new(800);
        let collected = treasury.collect_listing_fee(&mut payment).unwrap();
        assert_eq!(collected, 0);
        assert_eq!(payment.value(), 800);
        assert!(treasury.balance.is_zero());
    }

    #[test]
    fn underpayment_rejected_without_taking_anything() {
        let mut treasury = PlatformTreasury::new(admin(), 500);
        let mut payment = Value::new(499);
        let result = treasury.collect_listing_fee(&mut payment);
        match result.unwrap_err() {
            VaultError::InsufficientListingFee { needed, available } => {
                assert_eq!(needed, 500);
                assert_eq!(available, 499);
            }
            other => panic!("expected InsufficientListingFee, got {other:?}"),
        }
        assert_eq!(payment.value(), 499);
        assert!(treasury.balance.is_zero());
    }

    #[test]
    fn withdraw_is_admin_only() {
        let mut treasury = PlatformTreasury::new(admin(), 500);
        let mut payment = Value::new(500);
        treasury.collect_listing_fee(&mut payment).unwrap();

        let stranger = AccountId::new("toll_stranger");
        assert!(matches!(
            treasury.withdraw(&stranger, 0),
            Err(VaultError::NotAdmin)
        ));

        let withdrawn = treasury.withdraw(&admin(), 0).unwrap();
        assert_eq!(withdrawn.value(), 500);
        assert!(treasury.balance.is_zero());
    }

    #[test]
    fn withdraw_bounds_checked() {
        let mut treasury = PlatformTreasury::new(admin(), 100);
        let mut payment = Value::new(100);
        treasury.collect_listing_fee(&mut payment).unwrap();
        assert!(matches!(
            treasury.withdraw(&admin(), 101),
            Err(VaultError::InsufficientBalance { .. })
        ));
        assert_eq!(treasury.withdraw(&admin(), 100).unwrap().value(), 100);
    }
}
