//! Registry-specific errors.

use thiserror::Error;
use tollgate_types::{ContentId, VaultId};
use tollgate_vault::VaultError;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("rate must be positive")]
    InvalidRate,

    #[error("caller is not the content creator")]
    NotCreator,

    #[error("{0} not found")]
    ContentNotFound(ContentId),

    #[error("{0} not found")]
    VaultNotFound(VaultId),

    #[error(transparent)]
    Vault(#[from] VaultError),

    #[error("storage error: {0}")]
    Storage(String),
}
