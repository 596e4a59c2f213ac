//! Error types shared by every layer of the dashboard shell.

use thiserror::Error;

/// Failures of the durable key-value storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing file could not be read or written.
    #[error("storage I/O failed for {path}: {source}")]
    Io {
        /// Location of the backing file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A value could not be encoded or the backing document is corrupt.
    #[error("storage serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The platform storage (e.g. `localStorage`) rejected the operation.
    #[error("platform storage unavailable: {0}")]
    Platform(String),
}

/// Failures talking to the remote authority.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, timeout...).
    #[error("request to {url} failed: {source}")]
    Transport {
        /// Target URL.
        url: String,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// The authority answered with a non-success status.
    #[error(
        "{url} answered with status {status}{}",
        .message.as_ref().map(|m| format!(": {m}")).unwrap_or_default()
    )]
    Status {
        /// Target URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Reason from the error body, when the server sent one.
        message: Option<String>,
    },

    /// The response body did not match the expected shape.
    #[error("could not decode response from {url}: {source}")]
    Decode {
        /// Target URL.
        url: String,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// HTTP status carried by the error, if the server answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport { .. } | Self::Decode { .. } => None,
        }
    }
}

/// Failures while resolving the client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file {path}: {source}")]
    Io {
        /// Location of the configuration file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::config::ClientConfig`].
    #[error("invalid configuration file {path}: {source}")]
    Parse {
        /// Location of the configuration file.
        path: String,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// An environment variable held a value of the wrong shape.
    #[error("invalid value for {name}: {value}")]
    InvalidEnv {
        /// Variable name.
        name: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Route table registration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    /// Two descriptors share a name.
    #[error("duplicate route name `{0}`")]
    DuplicateName(String),

    /// Two descriptors share a path.
    #[error("duplicate route path `{0}`")]
    DuplicatePath(String),

    /// A required route is not registered.
    #[error("route table has no `{0}` route")]
    Missing(&'static str),

    /// A lookup named a route the table does not know.
    #[error("unknown route `{0}`")]
    Unknown(String),
}
