//! The credential record handed to client constructors.

use secrecy::{ExposeSecret, SecretString};

use crate::constants::{ACCOUNT_HOST_KEY_PLACEHOLDER, API_KEY_PLACEHOLDER};

/// Options for constructing an App Search client.
///
/// `api_endpoint` is `None` unless an endpoint was explicitly supplied, so
/// callers can tell "use the library default" apart from any real value.
/// Every field holds exactly the value it was given.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    api_key: SecretString,
    account_host_key: String,
    api_endpoint: Option<String>,
}

impl ClientOptions {
    /// Create options with no endpoint override.
    pub fn new(api_key: impl Into<String>, account_host_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into().into()),
            account_host_key: account_host_key.into(),
            api_endpoint: None,
        }
    }

    /// Return a copy with the endpoint override set.
    pub fn with_api_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.api_endpoint = Some(endpoint.into());
        self
    }

    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    pub fn account_host_key(&self) -> &str {
        &self.account_host_key
    }

    pub fn api_endpoint(&self) -> Option<&str> {
        self.api_endpoint.as_deref()
    }

    /// True if either required credential is still its placeholder value.
    ///
    /// A placeholder means the environment was not configured; requests made
    /// with these options against a real server will be rejected.
    pub fn uses_placeholder_credentials(&self) -> bool {
        self.api_key.expose_secret() == API_KEY_PLACEHOLDER
            || self.account_host_key == ACCOUNT_HOST_KEY_PLACEHOLDER
    }
}

impl PartialEq for ClientOptions {
    fn eq(&self, other: &Self) -> bool {
        self.api_key.expose_secret() == other.api_key.expose_secret()
            && self.account_host_key == other.account_host_key
            && self.api_endpoint == other.api_endpoint
    }
}

impl Eq for ClientOptions {}
