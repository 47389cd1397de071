//! Session persistence trait.

use crate::StoreError;
use tollgate_types::SessionId;

/// Store trait for persisting settlement engine state.
///
/// Uses opaque `Vec<u8>` blobs so the store doesn't depend on the
/// `tollgate-settlement` crate (which would create a circular dependency).
/// The engine serializes/deserializes its own records.
pub trait SessionStore {
    fn get_session(&self, id: SessionId) -> Result<Option<Vec<u8>>, StoreError>;
    fn put_session(&self, id: SessionId, record: &[u8]) -> Result<(), StoreError>;
    fn delete_session(&self, id: SessionId) -> Result<(), StoreError>;
    fn iter_sessions(&self) -> Result<Vec<(SessionId, Vec<u8>)>, StoreError>;

    fn get_meta(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;
    fn put_meta(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError>;
}
