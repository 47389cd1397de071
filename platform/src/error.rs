//! Unified error type for the platform façade.

use thiserror::Error;
use tollgate_registry::RegistryError;
use tollgate_settlement::SettlementError;
use tollgate_vault::VaultError;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Vault(#[from] VaultError),

    #[error(transparent)]
    Settlement(#[from] SettlementError),
}
