//! Frontend configuration module
//!
//! The browser has no environment or filesystem at runtime, so the deployment
//! environment is baked in when the bundle is built.

use shared::config::ClientConfig;

/// Build-time settings of the dashboard bundle.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Value of `BACKOFFICE_ENV` when the bundle was compiled.
    pub environment: Option<&'static str>,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            environment: option_env!("BACKOFFICE_ENV"),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Client settings for the selected environment.
    pub fn client(&self) -> ClientConfig {
        ClientConfig::for_environment(self.environment)
    }
}
