//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the App Search client against wiremock.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Clients built here carry an explicit key, never the environment's

#[allow(unused_imports)]
pub use app_search_client::testing::{InterceptedServer, load_fixture};
#[allow(unused_imports)]
pub use app_search_client::{AppSearchClient, ClientError, SearchOptions};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use secrecy::SecretString;

/// API key sent by every client from [`client_for`].
#[allow(dead_code)]
pub const TEST_API_KEY: &str = "private-test-key";

/// Build a client whose requests land on `server`.
#[allow(dead_code)]
pub fn client_for(server: &InterceptedServer) -> AppSearchClient {
    AppSearchClient::builder()
        .api_key(SecretString::new(TEST_API_KEY.to_string().into()))
        .api_endpoint(server.api_endpoint())
        .build()
        .expect("Failed to build test client")
}
