#![deny(unsafe_code)]

use std::fmt;

/// Lookup key for a player: the name lowercased with non-breaking spaces and
/// asterisk markers removed, then trimmed.
///
/// Not guaranteed unique across a dataset; two spellings that collapse to the
/// same key are treated as the same player for lookups.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PlayerKey(String);

impl PlayerKey {
    /// Wraps a value that has already been normalized.
    pub fn from_normalized(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PlayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
