//! The settlement engine — session lifecycle and time-based billing.

use std::collections::HashMap;

use crate::error::SettlementError;
use crate::fee::calc_fee_checked;
use crate::session::Session;
use tollgate_registry::ContentBinding;
use tollgate_types::{AccountId, SessionId, SessionStatus, Timestamp, Value};
use tollgate_vault::Vault;

/// Outcome of one settlement tick.
#[derive(Clone, Debug)]
pub struct Settlement {
    /// Milliseconds between the last checkpoint and `now`.
    pub elapsed_ms: u64,
    /// Amount moved from the deposit into the vault (0 for the defined
    /// no-op tick).
    pub paid: u128,
    /// Deposit balance after settlement.
    pub remaining: u128,
    /// Whether this settlement exhausted the deposit and paused the
    /// session.
    pub paused: bool,
}

/// Outcome of ending a session.
#[derive(Debug)]
pub struct Closure {
    /// The entire remaining deposit, refunded to the owner. May be zero —
    /// a zero refund is still a transfer, not a suppressed one.
    pub refund: Value,
    pub total_spent: u128,
    pub total_streamed_ms: u64,
}

/// The settlement engine — owns one [`Session`] per reader-content pair
/// and drives all time-based settlement.
///
/// Every call runs to completion against the records it touches; the host
/// serializes per-record access. Funds enter through a caller-held purse
/// (`&mut Value`) plus an explicit amount, so a failed precondition leaves
/// the caller's funds untouched — all-or-nothing is structural.
pub struct SettlementEngine {
    next_session_id: u64,
    /// Tracked sessions, keyed by id.
    pub sessions: HashMap<SessionId, Session>,
}

impl SettlementEngine {
    pub fn new() -> Self {
        Self {
            next_session_id: 1,
            sessions: HashMap::new(),
        }
    }

    /// Open a streaming session against `binding`, funding it with
    /// `amount` split from the caller's purse.
    ///
    /// `vault` must be the vault the binding references — a stale or
    /// mismatched argument is rejected before any value moves.
    pub fn start(
        &mut self,
        caller: &AccountId,
        binding: &ContentBinding,
        vault: &Vault,
        purse: &mut Value,
        amount: u128,
        now: Timestamp,
    ) -> Result<SessionId, SettlementError> {
        if amount == 0 {
            return Err(SettlementError::ZeroDeposit);
        }
        if binding.vault != vault.id {
            return Err(SettlementError::VaultMismatch {
                expected: binding.vault,
                got: vault.id,
            });
        }
        let deposit = purse.split(amount)?;

        let id = SessionId::new(self.next_session_id);
        self.next_session_id += 1;
        self.sessions.insert(
            id,
            Session {
                id,
                content: binding.id,
                vault: binding.vault,
                owner: caller.clone(),
                rate: binding.rate,
                deposit,
                started_at: now,
                last_checkpoint: now,
                status: SessionStatus::Active,
                total_spent: 0,
                total_streamed_ms: 0,
            },
        );
        Ok(id)
    }

    /// Settle the time elapsed since the last checkpoint into a payment.
    ///
    /// A tick whose fee truncates to zero (or whose elapsed time is zero)
    /// is a defined no-op: no field changes, including the checkpoint
    /// clock, so unsettled sub-quantum time stays billable.
    pub fn checkpoint(
        &mut self,
        caller: &AccountId,
        id: SessionId,
        vault: &mut Vault,
        now: Timestamp,
    ) -> Result<Settlement, SettlementError> {
        let session = self
            .sessions
            .get_mut(&id)
            .ok_or(SettlementError::SessionNotFound(id))?;
        if session.owner != *caller {
            return Err(SettlementError::NotOwner);
        }
        if !session.status.is_active() {
            return Err(SettlementError::InactiveSession {
                status: session.status,
            });
        }
        if vault.id != session.vault {
            return Err(SettlementError::VaultMismatch {
                expected: session.vault,
                got: vault.id,
            });
        }
        settle(session, vault, now)
    }

    /// Refill the deposit. Resuming a paused session restarts the billing
    /// clock at `now` — paused duration is never retroactively billed.
    ///
    /// Returns the deposit balance after the top-up.
    pub fn top_up(
        &mut self,
        caller: &AccountId,
        id: SessionId,
        purse: &mut Value,
        amount: u128,
        now: Timestamp,
    ) -> Result<u128, SettlementError> {
        let session = self
            .sessions
            .get_mut(&id)
            .ok_or(SettlementError::SessionNotFound(id))?;
        if session.owner != *caller {
            return Err(SettlementError::NotOwner);
        }
        if !session.status.can_mutate() {
            return Err(SettlementError::InactiveSession {
                status: session.status,
            });
        }
        if amount == 0 {
            return Err(SettlementError::ZeroDeposit);
        }
        if now.since(session.last_checkpoint).is_none() {
            return Err(SettlementError::ClockRegression {
                last_checkpoint: session.last_checkpoint,
                now,
            });
        }

        let added = purse.split(amount)?;
        session.deposit.join(added);
        if session.status == SessionStatus::Paused {
            session.status = SessionStatus::Active;
            session.last_checkpoint = now;
        }
        Ok(session.deposit.value())
    }

    /// Close a session: one implicit settlement if it is still active,
    /// then refund the entire remaining deposit.
    ///
    /// Ended is absorbing — any later mutating call on this session fails;
    /// queries remain permitted.
    pub fn end(
        &mut self,
        caller: &AccountId,
        id: SessionId,
        vault: &mut Vault,
        now: Timestamp,
    ) -> Result<Closure, SettlementError> {
        let session = self
            .sessions
            .get_mut(&id)
            .ok_or(SettlementError::SessionNotFound(id))?;
        if session.owner != *caller {
            return Err(SettlementError::NotOwner);
        }
        if !session.status.can_mutate() {
            return Err(SettlementError::InactiveSession {
                status: session.status,
            });
        }
        if vault.id != session.vault {
            return Err(SettlementError::VaultMismatch {
                expected: session.vault,
                got: vault.id,
            });
        }

        if session.status.is_active() {
            settle(session, vault, now)?;
        } else if now.since(session.last_checkpoint).is_none() {
            // Nothing to settle from a paused session, but a regressed
            // clock is still fatal.
            return Err(SettlementError::ClockRegression {
                last_checkpoint: session.last_checkpoint,
                now,
            });
        }

        session.status = SessionStatus::Ended;
        let refund = session.deposit.take_all();
        Ok(Closure {
            refund,
            total_spent: session.total_spent,
            total_streamed_ms: session.total_streamed_ms,
        })
    }

    /// Get a tracked session.
    pub fn session(&self, id: SessionId) -> Option<&Session> {
        self.sessions.get(&id)
    }

    /// Remaining deposit balance of a session.
    pub fn deposit_balance(&self, id: SessionId) -> Option<u128> {
        self.sessions.get(&id).map(|s| s.deposit.value())
    }

    /// Lifecycle status of a session.
    pub fn status(&self, id: SessionId) -> Option<SessionStatus> {
        self.sessions.get(&id).map(|s| s.status)
    }
}

/// The checkpoint settlement algorithm, shared by `checkpoint` and the
/// implicit final settlement in `end`. Preconditions (owner, status,
/// vault identity) are the caller's responsibility.
fn settle(
    session: &mut Session,
    vault: &mut Vault,
    now: Timestamp,
) -> Result<Settlement, SettlementError> {
    let elapsed_ms =
        now.since(session.last_checkpoint)
            .ok_or(SettlementError::ClockRegression {
                last_checkpoint: session.last_checkpoint,
                now,
            })?;
    let fee = calc_fee_checked(elapsed_ms, session.rate).ok_or(SettlementError::Overflow)?;
    let to_pay = fee.min(session.deposit.value());

    if to_pay == 0 {
        // Defined no-op: the checkpoint clock must not advance, so the
        // unsettled span folds into the next billable tick.
        return Ok(Settlement {
            elapsed_ms,
            paid: 0,
            remaining: session.deposit.value(),
            paused: false,
        });
    }

    let new_total_spent = session
        .total_spent
        .checked_add(to_pay)
        .ok_or(SettlementError::Overflow)?;
    let payment = session.deposit.split(to_pay)?;
    vault.credit(payment);
    session.total_spent = new_total_spent;
    session.total_streamed_ms = session.total_streamed_ms.saturating_add(elapsed_ms);
    session.last_checkpoint = now;

    let remaining = session.deposit.value();
    let paused = remaining == 0;
    if paused {
        session.status = SessionStatus::Paused;
    }
    Ok(Settlement {
        elapsed_ms,
        paid: to_pay,
        remaining,
        paused,
    })
}

impl SettlementEngine {
    /// Persist all engine state to a session store.
    pub fn save_to_store(
        &self,
        store: &dyn tollgate_store::SessionStore,
    ) -> Result<(), SettlementError> {
        store
            .put_meta(b"next_session_id", &self.next_session_id.to_be_bytes())
            .map_err(|e| SettlementError::Storage(e.to_string()))?;
        for (id, session) in &self.sessions {
            let bytes = bincode::serialize(session)
                .map_err(|e| SettlementError::Storage(e.to_string()))?;
            store
                .put_session(*id, &bytes)
                .map_err(|e| SettlementError::Storage(e.to_string()))?;
        }
        Ok(())
    }

    /// Restore engine state from a session store.
    pub fn load_from_store(
        store: &dyn tollgate_store::SessionStore,
    ) -> Result<Self, SettlementError> {
        let next_session_id = match store.get_meta(b"next_session_id") {
            Ok(Some(bytes)) if bytes.len() >= 8 => {
                u64::from_be_bytes(bytes[..8].try_into().unwrap())
            }
            _ => 1,
        };

        let entries = store
            .iter_sessions()
            .map_err(|e| SettlementError::Storage(e.to_string()))?;
        let mut sessions = HashMap::new();
        for (id, bytes) in entries {
            let session: Session = bincode::deserialize(&bytes)
                .map_err(|e| SettlementError::Storage(e.to_string()))?;
            sessions.insert(id, session);
        }
        Ok(Self {
            next_session_id,
            sessions,
        })
    }
}

impl Default for SettlementEngine {
    fn default() -> Self {
        Self::new()
    }
}
