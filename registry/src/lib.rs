//! Content registry for the tollgate platform.
//!
//! Binds each piece of content to its creator, price and earnings vault.
//! Registration collects the one-time listing fee and lazily creates a
//! vault for first-time creators. Mostly static data — the settlement
//! engine reads bindings, it never writes them.

pub mod binding;
pub mod error;
pub mod registry;

pub use binding::ContentBinding;
pub use error::RegistryError;
pub use registry::{ContentRegistry, Registration};
