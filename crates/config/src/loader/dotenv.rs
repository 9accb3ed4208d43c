//! Dotenv file loading for test and development credentials.

use std::path::Path;

use super::env::env_var_is_truthy;
use super::error::ConfigError;
use crate::constants::DOTENV_DISABLED_ENV;

/// Load variables from the dotenv file at `path`.
///
/// Variables already present in the process environment win; the file only
/// fills in the ones that are unset.
///
/// Returns `Ok(true)` if the file was loaded and `Ok(false)` if it does not
/// exist or `DOTENV_DISABLED` is set.
///
/// # Errors
///
/// - `ConfigError::DotenvParse` if the file has invalid syntax
/// - `ConfigError::DotenvIo` if the file exists but cannot be read
pub fn load_dotenv_file(path: &Path) -> Result<bool, ConfigError> {
    if env_var_is_truthy(DOTENV_DISABLED_ENV) {
        tracing::debug!(path = %path.display(), "dotenv loading disabled");
        return Ok(false);
    }

    match dotenvy::from_path(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "loaded dotenv file");
            Ok(true)
        }
        Err(dotenvy::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {
            Ok(false)
        }
        Err(dotenvy::Error::LineParse(_, idx)) => Err(ConfigError::DotenvParse {
            path: path.to_path_buf(),
            error_index: idx,
        }),
        Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
            path: path.to_path_buf(),
            kind: io_err.kind(),
        }),
        Err(_) => Err(ConfigError::DotenvUnknown {
            path: path.to_path_buf(),
        }),
    }
}
