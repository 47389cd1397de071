//! Accumulator-specific errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VaultError {
    #[error("caller is not the vault creator")]
    NotCreator,

    #[error("caller is not the platform admin")]
    NotAdmin,

    #[error("insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: u128, available: u128 },

    #[error("listing fee payment too small: need {needed}, have {available}")]
    InsufficientListingFee { needed: u128, available: u128 },
}
