//! Settlement engine — the core of the tollgate platform.
//!
//! Meters access to paid content by time: a reader's prepaid deposit is
//! debited and the creator's vault credited, one explicit checkpoint at a
//! time. There is no background scheduler — time only advances through
//! caller-invoked settlement calls.
//!
//! The per-session state machine is Active → Paused (deposit exhausted) →
//! Active (top-up) → Ended (final settlement + refund), with Ended
//! absorbing.

pub mod engine;
pub mod error;
pub mod fee;
pub mod session;

pub use engine::{Closure, Settlement, SettlementEngine};
pub use error::SettlementError;
pub use fee::{calc_fee, calc_fee_checked, QUANTUM_MS};
pub use session::Session;
