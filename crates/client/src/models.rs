//! Data models for App Search API responses and requests.

use serde::{Deserialize, Serialize};

/// Error body returned by the API for non-success responses.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiErrors {
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Pagination block inside `meta`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Page {
    #[serde(default)]
    pub current: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
    #[serde(default)]
    pub size: u32,
}

/// Response metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Meta {
    #[serde(default)]
    pub page: Page,
    #[serde(default)]
    pub request_id: Option<String>,
}

/// An engine as returned by the engines endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Engine {
    pub name: String,
    #[serde(rename = "type", default)]
    pub engine_type: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub document_count: Option<u64>,
}

/// Response of `GET engines`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EngineListResponse {
    #[serde(default)]
    pub meta: Meta,
    #[serde(default)]
    pub results: Vec<Engine>,
}

/// Paging options for a search request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub page_current: Option<u32>,
    pub page_size: Option<u32>,
}

/// Response of `POST engines/{name}/search`.
///
/// Result documents are returned as raw JSON; their field layout depends on
/// the engine schema.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub meta: Meta,
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
}
