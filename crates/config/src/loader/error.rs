//! Error types for dotenv loading.
//!
//! Invariants:
//! - Errors carry the file path and a position or kind, never file contents.
//! - Credential resolution has no error variants; it degrades to placeholders.

use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;

use crate::constants::DOTENV_DISABLED_ENV;

/// Errors raised while loading a dotenv file into the process environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file has a syntax error at byte `error_index`.
    #[error(
        "invalid dotenv syntax in {} at byte {error_index} (set {disable}=1 to skip loading)",
        .path.display(),
        disable = DOTENV_DISABLED_ENV
    )]
    DotenvParse { path: PathBuf, error_index: usize },

    /// The file exists but could not be read.
    #[error("cannot read dotenv file {}: {kind}", .path.display())]
    DotenvIo { path: PathBuf, kind: ErrorKind },

    #[error(
        "cannot load dotenv file {} (set {disable}=1 to skip loading)",
        .path.display(),
        disable = DOTENV_DISABLED_ENV
    )]
    DotenvUnknown { path: PathBuf },
}

impl ConfigError {
    /// Path of the dotenv file that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::DotenvParse { path, .. }
            | Self::DotenvIo { path, .. }
            | Self::DotenvUnknown { path } => path,
        }
    }
}
