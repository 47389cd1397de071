//! The content registry engine.

use std::collections::HashMap;

use crate::binding::ContentBinding;
use crate::error::RegistryError;
use tollgate_store::RegistryStore;
use tollgate_types::{AccountId, ContentId, PlatformParams, Value, VaultId};
use tollgate_vault::{PlatformTreasury, Vault};

/// Outcome of a successful content registration.
#[derive(Clone, Debug)]
pub struct Registration {
    pub content: ContentId,
    pub vault: VaultId,
    /// Listing fee actually collected (0 when fees are disabled).
    pub fee_paid: u128,
    /// Whether a fresh vault was created for a first-time creator.
    pub vault_created: bool,
}

/// The registry engine — owns content bindings, creator vaults and the
/// platform treasury.
pub struct ContentRegistry {
    next_content_id: u64,
    next_vault_id: u64,
    pub bindings: HashMap<ContentId, ContentBinding>,
    pub vaults: HashMap<VaultId, Vault>,
    /// Creator → vault index for lazy, idempotent vault creation.
    creator_vaults: HashMap<AccountId, VaultId>,
    pub treasury: PlatformTreasury,
}

impl ContentRegistry {
    pub fn new(admin: AccountId, params: &PlatformParams) -> Self {
        Self {
            next_content_id: 1,
            next_vault_id: 1,
            bindings: HashMap::new(),
            vaults: HashMap::new(),
            creator_vaults: HashMap::new(),
            treasury: PlatformTreasury::new(admin, params.listing_fee),
        }
    }

    /// Register new content at `rate` value units per billing quantum.
    ///
    /// Collects the listing fee from `payment` (the exact excess stays with
    /// the payer) and lazily creates the creator's vault on first
    /// registration — a returning creator reuses their existing vault.
    pub fn register(
        &mut self,
        creator: &AccountId,
        rate: u128,
        payment: &mut Value,
    ) -> Result<Registration, RegistryError> {
        if rate == 0 {
            return Err(RegistryError::InvalidRate);
        }
        let fee_paid = self.treasury.collect_listing_fee(payment)?;

        let (vault_id, vault_created) = match self.creator_vaults.get(creator) {
            Some(&id) => (id, false),
            None => {
                let id = VaultId::new(self.next_vault_id);
                self.next_vault_id += 1;
                self.vaults.insert(id, Vault::new(id, creator.clone()));
                self.creator_vaults.insert(creator.clone(), id);
                (id, true)
            }
        };

        let content = ContentId::new(self.next_content_id);
        self.next_content_id += 1;
        self.bindings.insert(
            content,
            ContentBinding {
                id: content,
                creator: creator.clone(),
                rate,
                vault: vault_id,
            },
        );

        Ok(Registration {
            content,
            vault: vault_id,
            fee_paid,
            vault_created,
        })
    }

    /// Update the price of a piece of content. Creator-only.
    pub fn update_rate(
        &mut self,
        content: ContentId,
        caller: &AccountId,
        new_rate: u128,
    ) -> Result<(), RegistryError> {
        if new_rate == 0 {
            return Err(RegistryError::InvalidRate);
        }
        let binding = self
            .bindings
            .get_mut(&content)
            .ok_or(RegistryError::ContentNotFound(content))?;
        if binding.creator != *caller {
            return Err(RegistryError::NotCreator);
        }
        binding.rate = new_rate;
        Ok(())
    }

    pub fn binding(&self, content: ContentId) -> Option<&ContentBinding> {
        self.bindings.get(&content)
    }

    pub fn vault(&self, id: VaultId) -> Option<&Vault> {
        self.vaults.get(&id)
    }

    pub fn vault_mut(&mut self, id: VaultId) -> Option<&mut Vault> {
        self.vaults.get_mut(&id)
    }

    /// The vault belonging to a creator, if they have registered before.
    pub fn creator_vault(&self, creator: &AccountId) -> Option<VaultId> {
        self.creator_vaults.get(creator).copied()
    }
}

impl ContentRegistry {
    /// Persist all registry state to a store.
    pub fn save_to_store(&self, store: &dyn RegistryStore) -> Result<(), RegistryError> {
        store
            .put_meta(b"next_content_id", &self.next_content_id.to_be_bytes())
            .map_err(|e| RegistryError::Storage(e.to_string()))?;
        store
            .put_meta(b"next_vault_id", &self.next_vault_id.to_be_bytes())
            .map_err(|e| RegistryError::Storage(e.to_string()))?;

        let treasury_bytes = bincode::serialize(&self.treasury)
            .map_err(|e| RegistryError::Storage(e.to_string()))?;
        store
            .put_meta(b"treasury", &treasury_bytes)
            .map_err(|e| RegistryError::Storage(e.to_string()))?;

        for (id, binding) in &self.bindings {
            let bytes =
                bincode::serialize(binding).map_err(|e| RegistryError::Storage(e.to_string()))?;
            store
                .put_binding(*id, &bytes)
                .map_err(|e| RegistryError::Storage(e.to_string()))?;
        }
        for (id, vault) in &self.vaults {
            let bytes =
                bincode::serialize(vault).map_err(|e| RegistryError::Storage(e.to_string()))?;
            store
                .put_vault(*id, &bytes)
                .map_err(|e| RegistryError::Storage(e.to_string()))?;
        }
        Ok(())
    }

    /// Restore registry state from a store.
    ///
    /// The creator → vault index is rebuilt from the loaded vaults.
    pub fn load_from_store(store: &dyn RegistryStore) -> Result<Self, RegistryError> {
        let next_content_id = match store.get_meta(b"next_content_id") {
            Ok(Some(bytes)) if bytes.len() >= 8 => {
                u64::from_be_bytes(bytes[..8].try_into().unwrap())
            }
            _ => 1,
        };
        let next_vault_id = match store.get_meta(b"next_vault_id") {
            Ok(Some(bytes)) if bytes.len() >= 8 => {
                u64::from_be_bytes(bytes[..8].try_into().unwrap())
            }
            _ => 1,
        };

        let treasury = match store.get_meta(b"treasury") {
            Ok(Some(bytes)) => bincode::deserialize(&bytes)
                .map_err(|e| RegistryError::Storage(e.to_string()))?,
            _ => return Err(RegistryError::Storage("treasury record missing".into())),
        };

        let mut bindings = HashMap::new();
        for (id, bytes) in store
            .iter_bindings()
            .map_err(|e| RegistryError::Storage(e.to_string()))?
        {
            let binding: ContentBinding =
                bincode::deserialize(&bytes).map_err(|e| RegistryError::Storage(e.to_string()))?;
            bindings.insert(id, binding);
        }

        let mut vaults = HashMap::new();
        let mut creator_vaults = HashMap::new();
        for (id, bytes) in store
            .iter_vaults()
            .map_err(|e| RegistryError::Storage(e.to_string()))?
        {
            let vault: Vault =
                bincode::deserialize(&bytes).map_err(|e| RegistryError::Storage(e.to_string()))?;
            creator_vaults.insert(vault.creator.clone(), id);
            vaults.insert(id, vault);
        }

        Ok(Self {
            next_content_id,
            next_vault_id,
            bindings,
            vaults,
            creator_vaults,
            treasury,
        })
    }
}
