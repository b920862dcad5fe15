//! Pluggable key-value persistence backends.
//!
//! The container persists three string-valued entries (`cart`, `wishlist`,
//! `user`). Anything that can get, set, and remove strings by key works as
//! a backend; [`MemoryStorage`] backs tests and embedding, [`FileStorage`]
//! is the on-disk analog of browser local storage.

pub mod fs;
pub mod memory;

pub use fs::FileStorage;
pub use memory::MemoryStorage;

use crate::config::ConfigError;

/// Errors surfaced by storage backends.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    /// Key contains characters the backend cannot represent.
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),

    /// The default storage location could not be resolved.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A string key-value store for persisted state fields.
///
/// Keys are short lowercase identifiers (`[a-z0-9_-]+`). Reading a missing
/// key yields `Ok(None)`; removing a missing key is a no-op.
pub trait StateStorage {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the entry under `key` if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Validate a storage key.
pub(crate) fn check_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_owned()))
    }
}
