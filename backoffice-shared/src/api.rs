//! HTTP client for the remote authority and the token validity check.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, RequestBuilder, Response};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::models::{ErrorResponse, UserProfile};

/// Endpoint answering with the profile of the token's owner.
pub const AUTH_USER_PATH: &str = "api/auth/user";

/// Lightweight client for the dashboard API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    client: Client,
    timeout: Duration,
}

impl ApiClient {
    /// Client for the API at `base_url`. Each request is bounded by
    /// `timeout` on targets that support it (not in the browser).
    #[must_use]
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            timeout,
        }
    }

    /// Client for the environment selected in `config`.
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_base_url(), config.request_timeout)
    }

    /// Origin this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorized(&self, request: RequestBuilder, token: &str) -> RequestBuilder {
        let request = request
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .header(ACCEPT, "application/json");
        #[cfg(not(target_arch = "wasm32"))]
        let request = request.timeout(self.timeout);
        request
    }

    async fn get_authorized(&self, path: &str, token: &str) -> Result<(String, Response), ApiError> {
        let url = self.api_url(path);
        let response = self
            .authorized(self.client.get(&url), token)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .ok()
                .map(|body| body.message);
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
                message,
            });
        }
        Ok((url, response))
    }

    /// Fetch the profile of the user owning `token`.
    ///
    /// # Errors
    /// Returns [`ApiError`] when the request fails, the server rejects the
    /// token, or the body is not a user profile.
    pub async fn authenticated_user(&self, token: &str) -> Result<UserProfile, ApiError> {
        let (url, response) = self.get_authorized(AUTH_USER_PATH, token).await?;
        response
            .json()
            .await
            .map_err(|source| ApiError::Decode { url, source })
    }

    /// Ask the authority whether `token` is accepted, without reading the body.
    ///
    /// # Errors
    /// Returns [`ApiError`] when the request fails or the status is not 2xx.
    pub async fn check_token(&self, token: &str) -> Result<(), ApiError> {
        self.get_authorized(AUTH_USER_PATH, token).await.map(|_| ())
    }
}

/// Decides whether a session token is currently accepted by the authority.
///
/// Implementations never fail: anything short of a positive answer is `false`.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait TokenValidator {
    /// Whether `token` is valid right now.
    async fn is_valid(&self, token: &str) -> bool;
}

/// [`TokenValidator`] backed by `GET /api/auth/user`.
#[derive(Clone, Debug)]
pub struct RemoteTokenValidator {
    client: ApiClient,
}

impl RemoteTokenValidator {
    /// Validate tokens through `client`.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl TokenValidator for RemoteTokenValidator {
    async fn is_valid(&self, token: &str) -> bool {
        match self.client.check_token(token).await {
            Ok(()) => {
                debug!("token accepted by authority");
                true
            }
            Err(err) => {
                warn!(error = %err, "token validation failed; treating as invalid");
                false
            }
        }
    }
}
