//! Session-scoped key-value storage.
//!
//! The cart store persists its state blob through a [`SessionStore`]: an
//! abstract byte store whose contents live for the browsing session. Two
//! backends are provided: [`MemoryStore`] (process lifetime) and
//! [`FileStore`] (survives restarts, like `localStorage` survives
//! reloads). Persistence is an optimization, not a correctness
//! requirement - callers swallow and log storage failures.

mod file;
mod memory;

use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors from a session storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend could not be read or written.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// The key could not be mapped to a storage location.
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// An abstract key-value byte store scoped to the browsing session.
pub trait SessionStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn put(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError>;

    /// Remove the value stored under `key`; no-op if absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
