//! Session lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The lifecycle status of a streaming session.
///
/// Transitions are restricted to Active→Paused (deposit exhausted),
/// Paused→Active (top-up), and {Active, Paused}→Ended. Ended is absorbing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Billing is live; checkpoints settle elapsed time.
    Active,
    /// Deposit exhausted; the billing clock is stopped until a top-up.
    Paused,
    /// Final settlement done and the remainder refunded. Terminal.
    Ended,
}

impl SessionStatus {
    /// Whether time-based settlement may run.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Whether the session accepts any mutating call at all.
    pub fn can_mutate(&self) -> bool {
        !matches!(self, Self::Ended)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Ended => "ended",
        };
        write!(f, "{}", s)
    }
}
