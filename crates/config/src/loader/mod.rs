//! Configuration loader for environment variables and dotenv files.
//!
//! Responsibilities:
//! - Resolve [`ClientOptions`](crate::ClientOptions) from `AS_*` environment variables.
//! - Load a `.env.test` file into the process environment on request.
//! - Enforce the `DOTENV_DISABLED` gate before any dotenv file is read.
//!
//! Does NOT handle:
//! - Building HTTP clients from the resolved options (see the client crate).
//! - Validating credential values; placeholders are returned, not rejected.
//!
//! Invariants / Assumptions:
//! - Empty or whitespace-only variables are treated as unset.
//! - Resolution never caches; every call reads the environment again.

mod credentials;
mod dotenv;
mod env;
mod error;

pub use credentials::{AliasPolicy, CredentialResolver, CredentialSource, resolve_client_options};
pub use dotenv::load_dotenv_file;
pub use env::{env_var_is_truthy, env_var_or_none, env_var_verbatim};
pub use error::ConfigError;

#[cfg(test)]
mod tests;
