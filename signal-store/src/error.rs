//! Registry Errors
//!
//! Every failure the registry can report. Existence violations
//! (`DuplicateKey`, `KeyNotFound`) are programmer errors: the caller used a
//! key that was not, or already was, registered. They are returned
//! synchronously and the registry is left exactly as it was.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RegistryError>;

#[derive(Debug, Error)]
pub enum RegistryError {
    /// `add_signal` was called for a key that already has a cell.
    #[error("Signal {key} already exists")]
    DuplicateKey { key: String },

    /// `get_signal` or `update_signal` was called for a key with no cell.
    #[error("Signal {key} does not exist")]
    KeyNotFound { key: String },

    /// The key exists but its cell holds a different value type.
    #[error("Signal {key} holds {found}, not {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A seeding record did not serialize to a keyed object.
    #[error("initial state must be a record, got {found}")]
    NotARecord { found: &'static str },

    /// A seeding record failed to serialize.
    #[error("failed to serialize initial state: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl RegistryError {
    pub(crate) fn duplicate(key: impl Into<String>) -> Self {
        Self::DuplicateKey { key: key.into() }
    }

    pub(crate) fn not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    /// The key the failed operation was addressed to, if any.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::DuplicateKey { key }
            | Self::KeyNotFound { key }
            | Self::TypeMismatch { key, .. } => Some(key),
            Self::NotARecord { .. } | Self::Serialize(_) => None,
        }
    }
}
