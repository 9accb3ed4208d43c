//! Centralized constants for the App Search workspace.
//!
//! Environment variable names and default values used across crates live here
//! so the config loader, the client builder, and the test harness agree on them.

// =============================================================================
// Credential Environment Variables
// =============================================================================

/// Primary source for the API key.
pub const API_KEY_ENV: &str = "AS_API_KEY";

/// Alternate API key variable, consulted only under [`AliasPolicy::WithAliases`].
///
/// [`AliasPolicy::WithAliases`]: crate::AliasPolicy::WithAliases
pub const API_KEY_ALIAS_ENV: &str = "AS_PRIVATE_KEY";

/// Primary source for the account host key.
pub const ACCOUNT_HOST_KEY_ENV: &str = "AS_ACCOUNT_HOST_KEY";

/// Alternate account host key variable, consulted only under
/// [`AliasPolicy::WithAliases`].
///
/// [`AliasPolicy::WithAliases`]: crate::AliasPolicy::WithAliases
pub const ACCOUNT_HOST_KEY_ALIAS_ENV: &str = "AS_HOST_IDENTIFIER";

/// Optional override of the API base URL.
pub const API_ENDPOINT_ENV: &str = "AS_API_ENDPOINT";

// =============================================================================
// Placeholder Fallbacks
// =============================================================================

/// Value used for the API key when no variable is set.
pub const API_KEY_PLACEHOLDER: &str = "API_KEY";

/// Value used for the account host key when no variable is set.
pub const ACCOUNT_HOST_KEY_PLACEHOLDER: &str = "ACCOUNT_HOST_KEY";

// =============================================================================
// Endpoint Defaults
// =============================================================================

/// Host suffix appended to the account host key to form the default endpoint.
pub const DEFAULT_API_HOST_SUFFIX: &str = "api.swiftype.com";

/// Versioned API path shared by the default endpoint and the test harness.
pub const API_BASE_PATH: &str = "/api/as/v1/";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// Test Harness
// =============================================================================

/// Seed for randomized suite ordering when `--seed` is not passed.
pub const TEST_SEED_ENV: &str = "APP_SEARCH_TEST_SEED";

/// Tracing filter for the harness subscriber.
pub const TEST_LOG_ENV: &str = "APP_SEARCH_TEST_LOG";

/// Disables `.env.test` loading when set to `1` or `true`.
pub const DOTENV_DISABLED_ENV: &str = "DOTENV_DISABLED";

/// File name of the dotenv file the harness loads from the workspace root.
pub const DOTENV_TEST_FILE: &str = ".env.test";
