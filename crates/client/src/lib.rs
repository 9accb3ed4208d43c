//! App Search REST API client.
//!
//! This crate provides a small, type-safe client for the hosted App Search
//! API, built from [`app_search_config::ClientOptions`]. With the `test-utils`
//! feature it also exposes [`testing`], the harness the workspace's test
//! suites run under: seeded random ordering plus HTTP interception.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

#[cfg(feature = "test-utils")]
pub mod testing;

pub use app_search_config::ClientOptions;
pub use client::AppSearchClient;
pub use client::builder::AppSearchClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    ApiErrors, Engine, EngineListResponse, Meta, Page, SearchOptions, SearchResponse,
};
