//! Error types for the test harness.

use thiserror::Error;

use crate::error::ClientError;
use app_search_config::ConfigError;

/// Errors raised while bootstrapping or using the harness.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// The seed given via `--seed` or `APP_SEARCH_TEST_SEED` is not a u64.
    #[error("Invalid seed '{value}': expected an unsigned 64-bit integer")]
    InvalidSeed { value: String },

    /// A test asked for the interception server while interception is off.
    #[error("HTTP interception is disabled for this harness")]
    InterceptionDisabled,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Client(#[from] ClientError),
}
