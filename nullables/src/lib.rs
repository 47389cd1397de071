//! Nullable infrastructure for deterministic testing.
//!
//! External dependencies of the core (clock, storage) are abstracted so
//! tests can swap in implementations that return deterministic values, can
//! be controlled programmatically, and never touch the filesystem.

pub mod clock;
pub mod store;

pub use clock::NullClock;
pub use store::{NullRegistryStore, NullSessionStore};
