//! Session state shared by the router and the UI.
//!
//! [`AppState`] is built once at startup and handed to whoever needs it;
//! nothing in this crate reaches for process-global stores.

mod flag;
mod token;
mod user;

pub use flag::Flag;
pub use token::TokenStore;
pub use user::UserStore;

use std::sync::Arc;

use tracing::info;

use crate::error::StorageError;
use crate::storage::KeyValueStore;

/// Every piece of client-side session state.
#[derive(Debug)]
pub struct AppState {
    /// Bearer token of the current session.
    pub token: TokenStore,
    /// Cached profile of the signed-in user.
    pub user: UserStore,
    /// Raised while the navigation guard waits on the remote authority.
    pub loading: Flag,
    /// Whether the navigation sidebar is expanded.
    pub sidebar: Flag,
}

impl AppState {
    /// Open the session stores on `storage`. Flags start lowered.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            token: TokenStore::open(Arc::clone(&storage)),
            user: UserStore::open(storage),
            loading: Flag::default(),
            sidebar: Flag::default(),
        }
    }

    /// Drop the session token and the cached profile.
    ///
    /// # Errors
    /// Returns the first [`StorageError`] hit; the profile is still cleared
    /// when removing the token fails.
    pub fn logout(&self) -> Result<(), StorageError> {
        let token = self.token.clear();
        let user = self.user.clear();
        info!("signed out");
        token.and(user)
    }
}
