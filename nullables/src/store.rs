//! Nullable stores — thread-safe in-memory storage for testing.

use std::collections::HashMap;
use std::sync::Mutex;

use tollgate_store::{RegistryStore, SessionStore, StoreError};
use tollgate_types::{ContentId, SessionId, VaultId};

/// An in-memory session store for testing.
pub struct NullSessionStore {
    sessions: Mutex<HashMap<SessionId, Vec<u8>>>,
    meta: Mutex<HashMap<Vec<u8>, Vec<u8>>>,
}

impl NullSessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            meta: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for NullSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for NullSessionStore {
    fn get_session(&self, id: SessionId) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.sessions.lock().unwrap().get(&id).cloned())
    }

    fn put_session(&self, id: SessionId, record: &[u8]) -> Result<(), StoreError> {
        self.sessions.lock().unwrap().insert(id, record.to_vec());
        Ok(())
    }

    fn delete_session(&self, id: SessionId) -> Result<(), StoreError> {
        self.sessions.lock().unwrap().remove(&id);
        Ok(())
    }

    fn iter_sessions(&self) -> Result<Vec<(SessionId, Vec<u8>)>, StoreError> {
        Ok(self
            .sessions
            .lock()
            .unwrap()
            .iter()
            .map(|(id, bytes)| (*id, bytes.clone()))
            .collect())
    }

    fn get_meta(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.meta.lock().unwrap().get(key).cloned())
    }

    fn put_meta(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        self.meta.lock().unwrap().insert(key.to_vec(), value.to_vec());
        Ok(())
    }
}

/// An in-memory registry store for testing.
pub struct NullRegistryStore {
    bindings: Mutex<HashMap<ContentId, Vec<u8>>>,
    vaults: Mutex<HashMap<VaultId, Vec<u8>>>,
    meta: Mutex<HashMap<Vec<u8>, Vec<u8>>>,
}

impl NullRegistryStore {
    pub fn new() -> Self {
        Self {
            bindings: Mutex::new(HashMap::new()),
            vaults: Mutex::new(HashMap::new()),
            meta: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for NullRegistryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryStore for NullRegistryStore {
    fn get_binding(&self, id: ContentId) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.bindings.lock().unwrap().get(&id).cloned())
    }

    fn put_binding(&self, id: ContentId, record: &[u8]) -> Result<(), StoreError> {
        self.bindings.lock().unwrap().insert(id, record.to_vec());
        Ok(())
    }

    fn iter_bindings(&self) -> Result<Vec<(ContentId, Vec<u8>)>, StoreError> {
        Ok(self
            .bindings
            .lock()
            .unwrap()
            .iter()
            .map(|(id, bytes)| (*id, bytes.clone()))
            .collect())
    }

    fn get_vault(&self, id: VaultId) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.vaults.lock().unwrap().get(&id).cloned())
    }

    fn put_vault(&self, id: VaultId, record: &[u8]) -> Result<(), StoreError> {
        self.vaults.lock().unwrap().insert(id, record.to_vec());
        Ok(())
    }

    fn iter_vaults(&self) -> Result<Vec<(VaultId, Vec<u8>)>, StoreError> {
        Ok(self
            .vaults
            .lock()
            .unwrap()
            .iter()
            .map(|(id, bytes)| (*id, bytes.clone()))
            .collect())
    }

    fn get_meta(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.meta.lock().unwrap().get(key).cloned())
    }

    fn put_meta(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        self.meta.lock().unwrap().insert(key.to_vec(), value.to_vec());
        Ok(())
    }
}
