//! Main App Search REST API client and API methods.
//!
//! # Submodules
//! - [`builder`]: Client construction and base URL derivation
//! - `engines`: Engine listing and lookup methods
//! - `search`: Search methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Credential resolution (delegated to `app_search_config`)
//!
//! # Invariants
//! - `base_url` always ends with exactly one `/`, so relative endpoint paths
//!   join beneath the versioned API path.

pub mod builder;

mod engines;
mod search;

use secrecy::{ExposeSecret, SecretString};
use url::Url;

/// App Search REST API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use app_search_client::AppSearchClient;
/// use app_search_config::resolve_client_options;
///
/// let client = AppSearchClient::builder()
///     .from_options(&resolve_client_options())
///     .build()?;
/// let engines = client.list_engines(None, None).await?;
/// ```
#[derive(Debug, Clone)]
pub struct AppSearchClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: Url,
    pub(crate) api_key: SecretString,
}

impl AppSearchClient {
    /// Create a new client builder.
    pub fn builder() -> builder::AppSearchClientBuilder {
        builder::AppSearchClientBuilder::new()
    }

    /// Get the base URL every endpoint path is joined onto.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}
