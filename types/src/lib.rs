//! Fundamental types for the tollgate settlement platform.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: account identities, the fungible value primitive, typed record
//! ids, timestamps, session status, and platform parameters.

pub mod address;
pub mod id;
pub mod params;
pub mod state;
pub mod time;
pub mod value;

pub use address::AccountId;
pub use id::{ContentId, SessionId, VaultId};
pub use params::PlatformParams;
pub use state::SessionStatus;
pub use time::Timestamp;
pub use value::{Value, ValueError};
