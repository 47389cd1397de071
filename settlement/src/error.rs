//! Settlement-specific errors.
//!
//! Every variant is fatal to its enclosing call: the call aborts with no
//! partial state change and is never retried internally.

use thiserror::Error;
use tollgate_types::{SessionId, SessionStatus, Timestamp, ValueError, VaultId};

#[derive(Debug, Error)]
pub enum SettlementError {
    #[error("{0} not found")]
    SessionNotFound(SessionId),

    #[error("caller is not the session owner")]
    NotOwner,

    #[error("session is {status}, operation requires an active session")]
    InactiveSession { status: SessionStatus },

    #[error("vault mismatch: session is bound to {expected}, got {got}")]
    VaultMismatch { expected: VaultId, got: VaultId },

    #[error("deposit amount must be positive")]
    ZeroDeposit,

    #[error("clock regression: {now} precedes last checkpoint {last_checkpoint}")]
    ClockRegression {
        last_checkpoint: Timestamp,
        now: Timestamp,
    },

    #[error("arithmetic overflow in settlement")]
    Overflow,

    #[error(transparent)]
    Value(#[from] ValueError),

    #[error("storage error: {0}")]
    Storage(String),
}
