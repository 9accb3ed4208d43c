//! Process-wide harness bootstrap.
//!
//! Responsibilities:
//! - Install the test tracing subscriber.
//! - Load `.env.test` from the workspace root, gated by `DOTENV_DISABLED`.
//! - Fix the ordering seed for the process and print it.
//! - Hand out per-case [`TestContext`]s with or without interception.
//!
//! Invariants:
//! - Bootstrap runs once per process; later calls return the first harness.
//! - The printed seed is the seed every [`Suite`](super::Suite) run uses.
//! - An intercepting harness refuses every client, however it is built, that
//!   does not target an interception server.

use std::path::PathBuf;
use std::sync::OnceLock;

use app_search_config::constants::{DOTENV_TEST_FILE, TEST_LOG_ENV};
use app_search_config::load_dotenv_file;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use super::context::TestContext;
use super::error::HarnessError;
use super::guard;
use super::seed::{seed_from_args, seed_from_env};

static HARNESS: OnceLock<Harness> = OnceLock::new();

/// Configuration passed explicitly to [`Harness::bootstrap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Explicit seed; `None` draws a fresh one.
    pub seed: Option<u64>,
    /// Redirect every context's client to an interception server.
    pub intercept: bool,
    /// Load `.env.test` from the workspace root before resolving credentials.
    pub load_dotenv: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            seed: None,
            intercept: true,
            load_dotenv: true,
        }
    }
}

impl HarnessConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn intercept(mut self, intercept: bool) -> Self {
        self.intercept = intercept;
        self
    }

    pub fn load_dotenv(mut self, load: bool) -> Self {
        self.load_dotenv = load;
        self
    }

    /// Default config with the seed taken from `--seed`, else `APP_SEARCH_TEST_SEED`.
    pub fn from_env_and_args<I, S>(args: I) -> Result<Self, HarnessError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let seed = match seed_from_args(args)? {
            Some(seed) => Some(seed),
            None => seed_from_env()?,
        };
        Ok(Self {
            seed,
            ..Self::default()
        })
    }
}

/// The bootstrapped harness. Obtain it through [`Harness::bootstrap`].
#[derive(Debug)]
pub struct Harness {
    seed: u64,
    config: HarnessConfig,
}

impl Harness {
    /// Bootstrap the harness for this process, or return the existing one.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError::Config` if `.env.test` exists but cannot be loaded.
    pub fn bootstrap(config: HarnessConfig) -> Result<&'static Harness, HarnessError> {
        if let Some(existing) = HARNESS.get() {
            if existing.config != config {
                debug!(
                    requested = ?config,
                    active = ?existing.config,
                    "Harness already bootstrapped, ignoring new config"
                );
            }
            return Ok(existing);
        }

        init_tracing();
        if config.load_dotenv {
            load_dotenv_file(&workspace_dotenv_path())?;
        }

        Ok(HARNESS.get_or_init(|| {
            let seed = config.seed.unwrap_or_else(rand::random);
            if config.intercept {
                guard::enforce();
            }
            eprintln!("Randomized with seed {}", seed);
            info!(seed, intercept = config.intercept, "Test harness bootstrapped");
            Harness { seed, config }
        }))
    }

    /// Seed used to order every suite run in this process.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Whether contexts redirect clients to an interception server.
    pub fn intercepts(&self) -> bool {
        self.config.intercept
    }

    /// Create a fresh context for one test case.
    pub async fn context(&self) -> TestContext {
        if self.config.intercept {
            TestContext::intercepted().await
        } else {
            TestContext::live()
        }
    }
}

/// `.env.test` at the workspace root, two levels above this crate.
fn workspace_dotenv_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join(DOTENV_TEST_FILE)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(TEST_LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // Another subscriber may already be installed by the embedding test binary.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
