//! Abstract storage traits for the tollgate platform.
//!
//! Every storage backend (and the in-memory test doubles in
//! `tollgate-nullables`) implements these traits. The engines depend only
//! on the traits.

pub mod error;
pub mod registry;
pub mod session;

pub use error::StoreError;
pub use registry::RegistryStore;
pub use session::SessionStore;
