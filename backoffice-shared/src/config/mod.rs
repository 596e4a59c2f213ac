//! # Configuration
//!
//! Client configuration resolved from defaults, an optional TOML file, and
//! `BACKOFFICE_*` environment variables, in that order of precedence.

use serde::Deserialize;
use std::{env, fs, path::Path, path::PathBuf, time::Duration};
use strum::{Display, EnumString};

use crate::error::ConfigError;

/// Environment variable selecting the [`Environment`].
pub const ENV_ENVIRONMENT: &str = "BACKOFFICE_ENV";
/// Environment variable overriding the request timeout, in seconds.
pub const ENV_REQUEST_TIMEOUT: &str = "BACKOFFICE_REQUEST_TIMEOUT_SECS";
/// Environment variable overriding the storage document location.
pub const ENV_STORAGE_PATH: &str = "BACKOFFICE_STORAGE_PATH";

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Deployment the client talks to. No other environments exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Environment {
    /// Local API on the developer's machine.
    Development,
    /// Public production API.
    #[default]
    Production,
}

impl Environment {
    /// Pick the environment from a raw name.
    ///
    /// Only the exact name `development` selects [`Environment::Development`];
    /// everything else, including no name at all, is production.
    #[must_use]
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("development") => Self::Development,
            _ => Self::Production,
        }
    }

    /// API origin for this environment, without a trailing slash.
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Development => "http://localhost:8000",
            Self::Production => "https://api.lunegravacoes.com.br",
        }
    }
}

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Target deployment.
    pub environment: Environment,
    /// Upper bound for a single request to the API.
    pub request_timeout: Duration,
    /// Location of the durable storage document; `None` means the platform default.
    pub storage_path: Option<PathBuf>,
}

/// On-disk shape of the configuration file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    environment: Option<String>,
    request_timeout_secs: Option<u64>,
    storage_path: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ClientConfig {
    /// Built-in defaults: production, ten-second timeout, default storage.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            environment: Environment::Production,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            storage_path: None,
        }
    }

    /// Configuration for builds that cannot read the runtime environment,
    /// such as the browser bundle. `environment` is usually
    /// `option_env!("BACKOFFICE_ENV")`.
    #[must_use]
    pub fn for_environment(environment: Option<&str>) -> Self {
        Self {
            environment: Environment::from_name(environment),
            ..Self::with_defaults()
        }
    }

    /// Resolve the configuration from defaults, `config_path`, and the
    /// process environment.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the file cannot be read or parsed, or an
    /// environment variable holds an invalid value.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::with_defaults();

        if let Some(path) = config_path {
            let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.display().to_string(),
                source,
            })?;
            let file: FileConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;
            config.apply_file(file);
        }

        config.apply_env()?;
        Ok(config)
    }

    fn apply_file(&mut self, file: FileConfig) {
        if let Some(environment) = file.environment {
            self.environment = Environment::from_name(Some(&environment));
        }
        if let Some(secs) = file.request_timeout_secs {
            self.request_timeout = Duration::from_secs(secs);
        }
        if let Some(path) = file.storage_path {
            self.storage_path = Some(path);
        }
    }

    fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(environment) = env::var(ENV_ENVIRONMENT) {
            self.environment = Environment::from_name(Some(&environment));
        }
        if let Ok(raw) = env::var(ENV_REQUEST_TIMEOUT) {
            let secs = raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidEnv {
                name: ENV_REQUEST_TIMEOUT,
                value: raw.clone(),
            })?;
            self.request_timeout = Duration::from_secs(secs);
        }
        if let Ok(path) = env::var(ENV_STORAGE_PATH) {
            if !path.trim().is_empty() {
                self.storage_path = Some(PathBuf::from(path));
            }
        }
        Ok(())
    }

    /// API origin selected by [`Self::environment`].
    #[must_use]
    pub const fn api_base_url(&self) -> &'static str {
        self.environment.base_url()
    }
}
