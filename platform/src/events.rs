//! Best-effort notification events.
//!
//! Emitted after successful mutations. Non-authoritative: no core
//! invariant depends on delivery, and a lost event is never re-sent.

use serde::Serialize;
use tollgate_types::{AccountId, ContentId, SessionId, VaultId};

/// A notification emitted after a successful state change.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    ContentRegistered {
        content: ContentId,
        creator: AccountId,
        rate: u128,
    },
    ListingFeePaid {
        content: ContentId,
        amount: u128,
    },
    VaultCreated {
        vault: VaultId,
        creator: AccountId,
    },
    SessionStarted {
        session: SessionId,
        content: ContentId,
        owner: AccountId,
        deposit: u128,
    },
    ToppedUp {
        session: SessionId,
        amount: u128,
        balance: u128,
    },
    /// Only emitted when `paid > 0` — the zero-fee no-op tick is silent.
    CheckpointSettled {
        session: SessionId,
        elapsed_ms: u64,
        paid: u128,
        remaining: u128,
    },
    /// Emitted even when the refund is zero.
    SessionEnded {
        session: SessionId,
        refund: u128,
        total_spent: u128,
    },
    VaultWithdrawn {
        vault: VaultId,
        amount: u128,
    },
    PlatformWithdrawn {
        amount: u128,
    },
}

/// Sink for best-effort notifications.
pub trait Notifier {
    fn notify(&self, event: &Event);
}

/// Logs every event through `tracing`, payload rendered as JSON.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, event: &Event) {
        match serde_json::to_string(event) {
            Ok(payload) => tracing::info!(%payload, "event"),
            Err(e) => tracing::warn!(error = %e, "failed to encode event"),
        }
    }
}

/// Discards every event. For tests.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _event: &Event) {}
}
