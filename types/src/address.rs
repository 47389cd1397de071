//! Account identity type with `toll_` prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An authenticated principal: a reader, a creator, or the platform admin.
///
/// Issued by the external identity provider. The core never verifies
/// credentials — it only compares the caller against stored
/// owner/creator/admin fields.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(String);

impl AccountId {
    /// The standard prefix for all tollgate account ids.
    pub const PREFIX: &'static str = "toll_";

    /// Create a new account id from a raw string.
    ///
    /// # Panics
    /// Panics if the string does not start with `toll_`.
    pub fn new(raw: impl Into<String>) -> Self {
        let s = raw.into();
        assert!(s.starts_with(Self::PREFIX), "account id must start with toll_");
        Self(s)
    }

    /// Return the raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate that this id is well-formed.
    pub fn is_valid(&self) -> bool {
        self.0.starts_with(Self::PREFIX) && self.0.len() > Self::PREFIX.len()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AccountId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
