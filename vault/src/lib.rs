//! Earnings accumulators for the tollgate platform.
//!
//! A [`Vault`] accumulates a creator's settled earnings: credited by the
//! settlement engine from any of that creator's sessions, debited only by
//! the creator's withdrawal. The [`PlatformTreasury`] collects the one-time
//! listing fee on content registration and is debited only by the platform
//! admin.
//!
//! Both are shared records — many sessions may credit the same vault — and
//! rely on the host's per-record serialization for atomicity.

pub mod error;
pub mod treasury;
pub mod vault;

pub use error::VaultError;
pub use treasury::PlatformTreasury;
pub use vault::Vault;
