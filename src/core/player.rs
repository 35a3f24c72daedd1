//! Player identification.
//!
//! Seats are identified by opaque string ids handed in by the match layer
//! (user ids, session ids). The engine never interprets them beyond equality
//! and hashing.

use serde::{Deserialize, Serialize};

/// Opaque player identifier.
///
/// ```
/// use tien_len::core::PlayerId;
///
/// let p = PlayerId::from("alice");
/// assert_eq!(p.as_str(), "alice");
/// assert_eq!(p.to_string(), "alice");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for PlayerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
