//! Participant identity.
//!
//! A participant is identified by their display name: an opaque,
//! case-sensitive string. The newtype keeps split maps and rosters from
//! silently accepting an arbitrary string where a participant is expected.
//! Keeping the name stable across renames is the ledger's job — the engine
//! only ever compares identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, case-sensitive participant identifier.
///
/// Serializes transparently as the inner string, so a
/// `HashMap<Participant, f64>` round-trips as a plain JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Participant(pub String);

impl Participant {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Participant {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}
