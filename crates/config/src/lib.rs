//! Configuration management for the App Search client.
//!
//! This crate resolves client credentials from the process environment and
//! exposes them as [`ClientOptions`], the record every client constructor and
//! test fixture in the workspace consumes.

pub mod constants;
mod loader;
mod options;

pub use loader::{
    AliasPolicy, ConfigError, CredentialResolver, CredentialSource, env_var_is_truthy,
    env_var_or_none, env_var_verbatim, load_dotenv_file, resolve_client_options,
};
pub use options::ClientOptions;
