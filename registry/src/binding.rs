//! Content binding records.

use serde::{Deserialize, Serialize};
use tollgate_types::{AccountId, ContentId, VaultId};

/// Binds a piece of content to its creator, price and earnings vault.
///
/// The vault reference is immutable after creation; the rate is mutable
/// only by the creator, through the registry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContentBinding {
    pub id: ContentId,
    pub creator: AccountId,
    /// Price in raw value units per billing quantum.
    pub rate: u128,
    pub vault: VaultId,
}
