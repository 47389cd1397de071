//! The tollgate platform façade.
//!
//! A thin adapter over the registry, vault and settlement crates: it routes
//! each external call to the right records, aggregates the per-crate errors
//! and emits best-effort notifications after successful mutations. All
//! invariants live in the underlying engines — nothing here compensates or
//! retries.

pub mod error;
pub mod events;
pub mod service;

pub use error::PlatformError;
pub use events::{Event, Notifier, NullNotifier, TracingNotifier};
pub use service::Tollgate;
