//! Client builder for constructing [`AppSearchClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Converting [`ClientOptions`] into builder settings
//! - Deriving the base URL from the account host key when no endpoint is given
//! - Configuring the underlying HTTP client (timeouts)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`AppSearchClient`] methods)
//! - Reading credentials from the environment (see `app_search_config`)
//!
//! # Invariants
//! - `api_key` and `account_host_key` are required unless an explicit
//!   endpoint is set, in which case only `api_key` is required
//! - The base URL is always normalized to end with exactly one `/`

use std::time::Duration;

use app_search_config::ClientOptions;
use app_search_config::constants::{API_BASE_PATH, DEFAULT_API_HOST_SUFFIX, DEFAULT_TIMEOUT_SECS};
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::client::AppSearchClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`AppSearchClient`].
pub struct AppSearchClientBuilder {
    api_key: Option<SecretString>,
    account_host_key: Option<String>,
    api_endpoint: Option<String>,
    timeout: Duration,
}

impl Default for AppSearchClientBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            account_host_key: None,
            api_endpoint: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AppSearchClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the private or public search API key.
    pub fn api_key(mut self, key: SecretString) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Set the account host key (e.g. `host-2376rq`).
    pub fn account_host_key(mut self, host_key: String) -> Self {
        self.account_host_key = Some(host_key);
        self
    }

    /// Override the API base URL.
    ///
    /// The endpoint should include the versioned API path, e.g.
    /// `http://localhost:3002/api/as/v1/`. A missing trailing slash is added.
    pub fn api_endpoint(mut self, endpoint: String) -> Self {
        self.api_endpoint = Some(endpoint);
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a client builder from resolved options.
    ///
    /// An absent endpoint in `options` leaves any endpoint already set on the
    /// builder untouched.
    pub fn from_options(mut self, options: &ClientOptions) -> Self {
        self.api_key = Some(options.api_key().clone());
        self.account_host_key = Some(options.account_host_key().to_string());
        if let Some(endpoint) = options.api_endpoint() {
            self.api_endpoint = Some(endpoint.to_string());
        }
        self
    }

    /// Default endpoint for an account: `https://{host_key}.api.swiftype.com/api/as/v1/`.
    fn default_endpoint(account_host_key: &str) -> String {
        format!(
            "https://{}.{}{}",
            account_host_key, DEFAULT_API_HOST_SUFFIX, API_BASE_PATH
        )
    }

    /// Normalize an endpoint so it ends with exactly one slash.
    ///
    /// - `"http://localhost:3002/api/as/v1"` -> `"http://localhost:3002/api/as/v1/"`
    /// - `"http://localhost:3002/api/as/v1//"` -> `"http://localhost:3002/api/as/v1/"`
    fn normalize_endpoint(endpoint: &str) -> String {
        format!("{}/", endpoint.trim_end_matches('/'))
    }

    /// Build the [`AppSearchClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingCredential`] if the API key (or, without
    /// an endpoint override, the account host key) was not provided.
    /// Returns [`ClientError::InvalidUrl`] if the resulting base URL does not parse.
    /// With the `test-utils` feature, returns `ClientError::UninterceptedEndpoint`
    /// if an intercepting harness is active and the base URL is not one of its
    /// servers.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<AppSearchClient> {
        let api_key = self
            .api_key
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or(ClientError::MissingCredential("api_key"))?;

        let endpoint = match self.api_endpoint {
            Some(endpoint) => endpoint,
            None => {
                let host_key = self
                    .account_host_key
                    .filter(|key| !key.trim().is_empty())
                    .ok_or(ClientError::MissingCredential("account_host_key"))?;
                Self::default_endpoint(&host_key)
            }
        };
        let endpoint = Self::normalize_endpoint(&endpoint);
        let base_url = Url::parse(&endpoint)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", endpoint, e)))?;

        #[cfg(feature = "test-utils")]
        crate::testing::guard::check_base_url(&base_url)?;

        tracing::debug!(base_url = %base_url, "Building App Search client");

        let http = reqwest::Client::builder().timeout(self.timeout).build()?;

        Ok(AppSearchClient {
            http,
            base_url,
            api_key,
        })
    }
}
