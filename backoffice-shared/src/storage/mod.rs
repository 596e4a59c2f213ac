//! Durable key-value storage contract and its host implementations.
//!
//! The browser implementation lives in the web crate next to `gloo-storage`.

#[cfg(not(target_arch = "wasm32"))]
mod file;
mod memory;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::StorageError;

/// String key-value persistence consumed by the session stores.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    /// Returns [`StorageError`] when the backing store cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns [`StorageError`] when the backing store cannot be written.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    /// Returns [`StorageError`] when the backing store cannot be written.
    fn delete(&self, key: &str) -> Result<(), StorageError>;
}
