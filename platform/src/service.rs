//! The platform service — routes external calls to the engines.

use crate::error::PlatformError;
use crate::events::{Event, Notifier, TracingNotifier};
use tollgate_registry::{ContentRegistry, Registration, RegistryError};
use tollgate_settlement::{Closure, Settlement, SettlementEngine, SettlementError};
use tollgate_types::{
    AccountId, ContentId, PlatformParams, SessionId, SessionStatus, Timestamp, Value, VaultId,
};

/// The tollgate platform: registry + settlement engine behind one façade.
///
/// Every mutating call carries the authenticated caller and an explicit
/// `now`; the façade never reads the wall clock itself.
pub struct Tollgate {
    pub registry: ContentRegistry,
    pub engine: SettlementEngine,
    notifier: Box<dyn Notifier>,
}

impl Tollgate {
    pub fn new(admin: AccountId, params: PlatformParams) -> Self {
        Self::with_notifier(admin, params, Box::new(TracingNotifier))
    }

    pub fn with_notifier(
        admin: AccountId,
        params: PlatformParams,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            registry: ContentRegistry::new(admin, &params),
            engine: SettlementEngine::new(),
            notifier,
        }
    }

    /// Register content, collecting the listing fee from `payment`.
    pub fn register_content(
        &mut self,
        creator: &AccountId,
        rate: u128,
        payment: &mut Value,
    ) -> Result<Registration, PlatformError> {
        let reg = self.registry.register(creator, rate, payment)?;
        if reg.vault_created {
            self.notifier.notify(&Event::VaultCreated {
                vault: reg.vault,
                creator: creator.clone(),
            });
        }
        self.notifier.notify(&Event::ContentRegistered {
            content: reg.content,
            creator: creator.clone(),
            rate,
        });
        if reg.fee_paid > 0 {
            self.notifier.notify(&Event::ListingFeePaid {
                content: reg.content,
                amount: reg.fee_paid,
            });
        }
        Ok(reg)
    }

    /// Update the price of a piece of content. Creator-only.
    pub fn update_rate(
        &mut self,
        content: ContentId,
        caller: &AccountId,
        new_rate: u128,
    ) -> Result<(), PlatformError> {
        self.registry.update_rate(content, caller, new_rate)?;
        Ok(())
    }

    /// Open a session against registered content, funding it from the
    /// caller's purse.
    pub fn start_session(
        &mut self,
        caller: &AccountId,
        content: ContentId,
        purse: &mut Value,
        amount: u128,
        now: Timestamp,
    ) -> Result<SessionId, PlatformError> {
        let binding = self
            .registry
            .binding(content)
            .ok_or(RegistryError::ContentNotFound(content))?
            .clone();
        let vault = self
            .registry
            .vault(binding.vault)
            .ok_or(RegistryError::VaultNotFound(binding.vault))?;
        let session = self
            .engine
            .start(caller, &binding, vault, purse, amount, now)?;
        self.notifier.notify(&Event::SessionStarted {
            session,
            content,
            owner: caller.clone(),
            deposit: amount,
        });
        Ok(session)
    }

    /// Settle elapsed time on a session into its creator's vault.
    pub fn checkpoint(
        &mut self,
        caller: &AccountId,
        session: SessionId,
        now: Timestamp,
    ) -> Result<Settlement, PlatformError> {
        let vault_id = self.session_vault(session)?;
        let vault = self
            .registry
            .vault_mut(vault_id)
            .ok_or(RegistryError::VaultNotFound(vault_id))?;
        let settled = self.engine.checkpoint(caller, session, vault, now)?;
        if settled.paid > 0 {
            self.notifier.notify(&Event::CheckpointSettled {
                session,
                elapsed_ms: settled.elapsed_ms,
                paid: settled.paid,
                remaining: settled.remaining,
            });
        }
        Ok(settled)
    }

    /// Refill a session's deposit from the caller's purse.
    pub fn top_up(
        &mut self,
        caller: &AccountId,
        session: SessionId,
        purse: &mut Value,
        amount: u128,
        now: Timestamp,
    ) -> Result<u128, PlatformError> {
        let balance = self.engine.top_up(caller, session, purse, amount, now)?;
        self.notifier.notify(&Event::ToppedUp {
            session,
            amount,
            balance,
        });
        Ok(balance)
    }

    /// End a session: final settlement, then refund of the remainder.
    pub fn end_session(
        &mut self,
        caller: &AccountId,
        session: SessionId,
        now: Timestamp,
    ) -> Result<Closure, PlatformError> {
        let vault_id = self.session_vault(session)?;
        let vault = self
            .registry
            .vault_mut(vault_id)
            .ok_or(RegistryError::VaultNotFound(vault_id))?;
        let closure = self.engine.end(caller, session, vault, now)?;
        self.notifier.notify(&Event::SessionEnded {
            session,
            refund: closure.refund.value(),
            total_spent: closure.total_spent,
        });
        Ok(closure)
    }

    /// Withdraw a creator's settled earnings. `amount == 0` withdraws
    /// everything.
    pub fn withdraw_vault(
        &mut self,
        caller: &AccountId,
        vault: VaultId,
        amount: u128,
    ) -> Result<Value, PlatformError> {
        let record = self
            .registry
            .vault_mut(vault)
            .ok_or(RegistryError::VaultNotFound(vault))?;
        let withdrawn = record.withdraw(caller, amount)?;
        self.notifier.notify(&Event::VaultWithdrawn {
            vault,
            amount: withdrawn.value(),
        });
        Ok(withdrawn)
    }

    /// Withdraw collected listing fees. Admin-only; `amount == 0`
    /// withdraws everything.
    pub fn withdraw_platform(
        &mut self,
        caller: &AccountId,
        amount: u128,
    ) -> Result<Value, PlatformError> {
        let withdrawn = self.registry.treasury.withdraw(caller, amount)?;
        self.notifier.notify(&Event::PlatformWithdrawn {
            amount: withdrawn.value(),
        });
        Ok(withdrawn)
    }

    // ── Queries (pure reads) ─────────────────────────────────────────────

    /// Collected listing fees not yet withdrawn.
    pub fn platform_fee_balance(&self) -> u128 {
        self.registry.treasury.balance.value()
    }

    /// A creator vault's settled, unwithdrawn earnings.
    pub fn vault_balance(&self, vault: VaultId) -> Option<u128> {
        self.registry.vault(vault).map(|v| v.balance.value())
    }

    /// A session's remaining deposit.
    pub fn session_deposit(&self, session: SessionId) -> Option<u128> {
        self.engine.deposit_balance(session)
    }

    /// A session's lifecycle status.
    pub fn session_status(&self, session: SessionId) -> Option<SessionStatus> {
        self.engine.status(session)
    }

    fn session_vault(&self, session: SessionId) -> Result<VaultId, PlatformError> {
        Ok(self
            .engine
            .session(session)
            .ok_or(SettlementError::SessionNotFound(session))?
            .vault)
    }
}
