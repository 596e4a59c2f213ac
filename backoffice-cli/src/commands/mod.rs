use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use shared::config::ClientConfig;
use shared::storage::FileStorage;
use shared::{ApiClient, AppState};
use tracing::debug;

pub mod format;
pub mod navigate;
pub mod session;
pub mod token;

/// Everything a stateful command needs, resolved once per invocation.
pub struct Context {
    pub storage_path: PathBuf,
    pub state: Arc<AppState>,
    pub api: ApiClient,
}

impl Context {
    /// Resolve configuration and open the session stores.
    ///
    /// The storage location comes from `storage_override`, then the
    /// configuration, then the platform data directory.
    pub fn load(config_path: Option<&Path>, storage_override: Option<PathBuf>) -> Result<Self> {
        let config = ClientConfig::load(config_path).context("failed to load configuration")?;
        let storage_path = storage_override
            .or_else(|| config.storage_path.clone())
            .or_else(FileStorage::default_path)
            .context("no storage location available; pass --storage")?;
        debug!(
            environment = %config.environment,
            storage = %storage_path.display(),
            "context resolved"
        );

        let state = Arc::new(AppState::new(Arc::new(FileStorage::new(&storage_path))));
        let api = ApiClient::from_config(&config);
        Ok(Self {
            storage_path,
            state,
            api,
        })
    }
}
