//! Platform parameters.

use serde::{Deserialize, Serialize};

/// Administrative configuration consumed by the core.
///
/// Owned and updated by the platform operator; the core only reads it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlatformParams {
    /// One-time listing fee (raw value units) charged per content
    /// registration. Zero disables fee collection entirely.
    pub listing_fee: u128,
}

impl PlatformParams {
    /// Tollgate defaults — the intended live configuration.
    pub fn tollgate_defaults() -> Self {
        Self { listing_fee: 500 }
    }

    /// A fee-free configuration, useful for invite-only deployments.
    pub fn no_listing_fee() -> Self {
        Self { listing_fee: 0 }
    }
}

/// Default is the tollgate live configuration.
impl Default for PlatformParams {
    fn default() -> Self {
        Self::tollgate_defaults()
    }
}
