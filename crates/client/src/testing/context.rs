//! Per-case test context.

use std::sync::Arc;

use app_search_config::{ClientOptions, resolve_client_options};

use super::error::HarnessError;
use super::intercept::InterceptedServer;
use crate::client::AppSearchClient;

/// Values made available to a single test case.
///
/// Credentials are resolved from the environment on every call and never
/// cached. When interception is on, each context owns its own server.
#[derive(Clone)]
pub struct TestContext {
    server: Option<Arc<InterceptedServer>>,
}

impl TestContext {
    /// Context whose clients are redirected to a fresh interception server.
    pub async fn intercepted() -> Self {
        Self {
            server: Some(Arc::new(InterceptedServer::start().await)),
        }
    }

    /// Context whose clients talk to the endpoint the environment names.
    pub fn live() -> Self {
        Self { server: None }
    }

    /// Credentials exactly as the environment provides them.
    pub fn credentials(&self) -> ClientOptions {
        resolve_client_options()
    }

    /// Credentials with the endpoint pointed at the interception server,
    /// when there is one.
    pub fn client_options(&self) -> ClientOptions {
        let options = self.credentials();
        match &self.server {
            Some(server) => options.with_api_endpoint(server.api_endpoint()),
            None => options,
        }
    }

    /// The interception server for mounting stubs.
    pub fn server(&self) -> Result<&InterceptedServer, HarnessError> {
        self.server
            .as_deref()
            .ok_or(HarnessError::InterceptionDisabled)
    }

    /// Build a client from [`client_options`](Self::client_options).
    pub fn client(&self) -> Result<AppSearchClient, HarnessError> {
        Ok(AppSearchClient::builder()
            .from_options(&self.client_options())
            .build()?)
    }
}
