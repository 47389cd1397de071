//! The per-reader streaming session record.

use serde::{Deserialize, Serialize};
use tollgate_types::{AccountId, ContentId, SessionId, SessionStatus, Timestamp, Value, VaultId};

/// A per-reader, per-content billing record.
///
/// Single-writer: created by `start`, mutated only by its recorded owner
/// through the settlement engine, frozen once `status` reaches `Ended`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub content: ContentId,
    pub vault: VaultId,
    pub owner: AccountId,
    /// Price in raw value units per billing quantum, copied from the
    /// content binding at start time.
    pub rate: u128,
    /// Remaining prepaid deposit.
    pub deposit: Value,
    pub started_at: Timestamp,
    /// The last instant whose streamed time has been settled. Advances
    /// only when a settlement actually transfers a nonzero amount, so
    /// sub-quantum residuals stay billable.
    pub last_checkpoint: Timestamp,
    pub status: SessionStatus,
    /// Lifetime amount settled into the vault (never decreases).
    pub total_spent: u128,
    /// Lifetime billed streaming time in milliseconds.
    pub total_streamed_ms: u64,
}
