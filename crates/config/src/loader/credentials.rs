//! Credential resolution from the process environment.
//!
//! Responsibilities:
//! - Map each credential to its primary variable, alias variable, and placeholder.
//! - Resolve a fresh [`ClientOptions`] on every call.
//! - Warn when a placeholder is returned, since that means misconfiguration.
//!
//! Does NOT handle:
//! - Dotenv loading (see dotenv.rs); callers load files before resolving.
//!
//! Invariants:
//! - Under [`AliasPolicy::PrimaryOnly`] alias variables are never read.
//! - The endpoint has no placeholder: an unset `AS_API_ENDPOINT` yields `None`.
//! - Set variables are returned verbatim. An empty `AS_API_ENDPOINT` is set,
//!   so it yields `Some("")`.

use tracing::warn;

use super::env::env_var_verbatim;
use crate::constants::{
    ACCOUNT_HOST_KEY_ALIAS_ENV, ACCOUNT_HOST_KEY_ENV, ACCOUNT_HOST_KEY_PLACEHOLDER,
    API_ENDPOINT_ENV, API_KEY_ALIAS_ENV, API_KEY_ENV, API_KEY_PLACEHOLDER,
};
use crate::options::ClientOptions;

/// Which environment variable names are consulted for each credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AliasPolicy {
    /// Only the primary variable, then the placeholder.
    #[default]
    PrimaryOnly,
    /// The primary variable, then the alias variable, then the placeholder.
    WithAliases,
}

/// Variable names and placeholder for a single credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialSource {
    pub primary: &'static str,
    pub alias: &'static str,
    pub placeholder: &'static str,
}

impl CredentialSource {
    pub const API_KEY: Self = Self {
        primary: API_KEY_ENV,
        alias: API_KEY_ALIAS_ENV,
        placeholder: API_KEY_PLACEHOLDER,
    };

    pub const ACCOUNT_HOST_KEY: Self = Self {
        primary: ACCOUNT_HOST_KEY_ENV,
        alias: ACCOUNT_HOST_KEY_ALIAS_ENV,
        placeholder: ACCOUNT_HOST_KEY_PLACEHOLDER,
    };

    /// Look the credential up without falling back to the placeholder.
    pub fn lookup(&self, policy: AliasPolicy) -> Option<String> {
        env_var_verbatim(self.primary).or_else(|| match policy {
            AliasPolicy::WithAliases => env_var_verbatim(self.alias),
            AliasPolicy::PrimaryOnly => None,
        })
    }

    /// Look the credential up, returning the placeholder if no variable is set.
    pub fn resolve(&self, policy: AliasPolicy) -> String {
        match self.lookup(policy) {
            Some(value) => value,
            None => {
                warn!(
                    var = self.primary,
                    placeholder = self.placeholder,
                    "Credential variable is not set, using placeholder value"
                );
                self.placeholder.to_string()
            }
        }
    }
}

/// Resolves [`ClientOptions`] from the environment.
///
/// # Example
///
/// ```rust,ignore
/// use app_search_config::{AliasPolicy, CredentialResolver};
///
/// let options = CredentialResolver::new()
///     .alias_policy(AliasPolicy::WithAliases)
///     .resolve();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialResolver {
    alias_policy: AliasPolicy,
}

impl CredentialResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alias_policy(mut self, policy: AliasPolicy) -> Self {
        self.alias_policy = policy;
        self
    }

    pub fn resolve(&self) -> ClientOptions {
        let api_key = CredentialSource::API_KEY.resolve(self.alias_policy);
        let account_host_key = CredentialSource::ACCOUNT_HOST_KEY.resolve(self.alias_policy);

        let options = ClientOptions::new(api_key, account_host_key);
        match env_var_verbatim(API_ENDPOINT_ENV) {
            Some(endpoint) => options.with_api_endpoint(endpoint),
            None => options,
        }
    }
}

/// Resolve client options from `AS_API_KEY`, `AS_ACCOUNT_HOST_KEY` and
/// `AS_API_ENDPOINT` using the default [`AliasPolicy`].
pub fn resolve_client_options() -> ClientOptions {
    CredentialResolver::new().resolve()
}
