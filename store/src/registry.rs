//! Registry persistence trait — bindings, vaults and the treasury.

use crate::StoreError;
use tollgate_types::{ContentId, VaultId};

/// Store trait for persisting registry state.
///
/// Byte-oriented for the same reason as [`crate::SessionStore`]: the
/// registry serializes its own record types.
pub trait RegistryStore {
    fn get_binding(&self, id: ContentId) -> Result<Option<Vec<u8>>, StoreError>;
    fn put_binding(&self, id: ContentId, record: &[u8]) -> Result<(), StoreError>;
    fn iter_bindings(&self) -> Result<Vec<(ContentId, Vec<u8>)>, StoreError>;

    fn get_vault(&self, id: VaultId) -> Result<Option<Vec<u8>>, StoreError>;
    fn put_vault(&self, id: VaultId, record: &[u8]) -> Result<(), StoreError>;
    fn iter_vaults(&self) -> Result<Vec<(VaultId, Vec<u8>)>, StoreError>;

    fn get_meta(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;
    fn put_meta(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError>;
}
