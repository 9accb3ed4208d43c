//! Test harness for suites that exercise the App Search client.
//!
//! This module provides the process-wide harness bootstrap, HTTP
//! interception, seeded random test ordering, and credential fixtures.
//! Available when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use app_search_client::testing::{Harness, HarnessConfig, Suite};
//!
//! fn main() {
//!     let config = HarnessConfig::from_env_and_args(std::env::args().skip(1))
//!         .expect("invalid harness arguments");
//!     let harness = Harness::bootstrap(config).expect("harness bootstrap failed");
//!
//!     let suite = Suite::new().case("lists engines", |ctx| async move {
//!         let client = ctx.client()?;
//!         // mount mocks on ctx.server()? ...
//!         Ok(())
//!     });
//!
//!     let runtime = tokio::runtime::Runtime::new().unwrap();
//!     runtime.block_on(suite.run(harness)).exit();
//! }
//! ```

mod context;
mod error;
pub(crate) mod guard;
mod harness;
mod intercept;
mod seed;
mod suite;

pub use context::TestContext;
pub use error::HarnessError;
pub use guard::interception_enforced;
pub use harness::{Harness, HarnessConfig};
pub use intercept::InterceptedServer;
pub use seed::{parse_seed, seed_from_args, seed_from_env};
pub use suite::{CaseFailure, Suite, SuiteReport};

use std::path::Path;

/// Load a JSON fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory
///   (e.g., "engines/list_engines.json")
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let full_path = manifest_dir.join("fixtures").join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}
