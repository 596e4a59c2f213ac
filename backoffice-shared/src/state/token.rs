use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, warn};

use crate::error::StorageError;
use crate::storage::KeyValueStore;

const TOKEN_KEY: &str = "token";

/// Holder of the current bearer token.
///
/// The persisted value is read once when the store is opened and every
/// later read is served from memory. The token is opaque here.
pub struct TokenStore {
    storage: Arc<dyn KeyValueStore>,
    current: RwLock<Option<String>>,
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore")
            .field("present", &self.get().is_some())
            .finish_non_exhaustive()
    }
}

impl TokenStore {
    /// Open the store on top of `storage`, loading any persisted token.
    ///
    /// An unreadable storage backend is treated as holding no token.
    pub fn open(storage: Arc<dyn KeyValueStore>) -> Self {
        let current = match storage.read(TOKEN_KEY) {
            Ok(token) => token.filter(|token| !token.is_empty()),
            Err(err) => {
                warn!(error = %err, "could not read persisted token; starting signed out");
                None
            }
        };

        Self {
            storage,
            current: RwLock::new(current),
        }
    }

    /// The current token, if any.
    pub fn get(&self) -> Option<String> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Persist `token` and make it the current one.
    ///
    /// # Errors
    /// Returns [`StorageError`] when the token cannot be persisted; the
    /// in-memory value is left untouched in that case.
    pub fn set(&self, token: impl Into<String>) -> Result<(), StorageError> {
        let token = token.into();
        self.storage.write(TOKEN_KEY, &token)?;
        *self.current.write().unwrap_or_else(PoisonError::into_inner) =
            Some(token).filter(|token| !token.is_empty());
        debug!("session token stored");
        Ok(())
    }

    /// Forget the current token.
    ///
    /// # Errors
    /// Returns [`StorageError`] when the persisted token cannot be removed.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.delete(TOKEN_KEY)?;
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = None;
        debug!("session token cleared");
        Ok(())
    }
}
