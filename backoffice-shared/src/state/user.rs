use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, warn};

use crate::error::StorageError;
use crate::models::UserProfile;
use crate::storage::KeyValueStore;

const USER_KEY: &str = "user";

/// Cached profile of the signed-in user, persisted as JSON.
pub struct UserStore {
    storage: Arc<dyn KeyValueStore>,
    current: RwLock<Option<UserProfile>>,
}

impl std::fmt::Debug for UserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserStore")
            .field("current", &self.get())
            .finish_non_exhaustive()
    }
}

impl UserStore {
    /// Open the store on top of `storage`.
    ///
    /// A persisted profile that cannot be read or parsed is treated as
    /// absent.
    pub fn open(storage: Arc<dyn KeyValueStore>) -> Self {
        let current = match storage.read(USER_KEY) {
            Ok(Some(raw)) if !raw.is_empty() => match serde_json::from_str(&raw) {
                Ok(profile) => Some(profile),
                Err(err) => {
                    warn!(error = %err, "discarding unreadable persisted user profile");
                    None
                }
            },
            Ok(_) => None,
            Err(err) => {
                warn!(error = %err, "could not read persisted user profile");
                None
            }
        };

        Self {
            storage,
            current: RwLock::new(current),
        }
    }

    /// The cached profile, if any.
    pub fn get(&self) -> Option<UserProfile> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Persist `profile` and make it the current one.
    ///
    /// # Errors
    /// Returns [`StorageError`] when the profile cannot be encoded or stored.
    pub fn set(&self, profile: UserProfile) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(&profile)?;
        self.storage.write(USER_KEY, &encoded)?;
        debug!(user_id = profile.id, "user profile stored");
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(profile);
        Ok(())
    }

    /// Forget the cached profile.
    ///
    /// # Errors
    /// Returns [`StorageError`] when the persisted profile cannot be removed.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.delete(USER_KEY)?;
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}
