//! Engine endpoints.

use reqwest::Client;
use tracing::debug;
use url::Url;

use super::request::decode_json;
use crate::endpoints::{encode_path_segment, endpoint_url, send_request};
use crate::error::Result;
use crate::models::{Engine, EngineListResponse};

/// List engines (`GET engines`).
pub async fn list_engines(
    client: &Client,
    base_url: &Url,
    api_key: &str,
    page_current: Option<u32>,
    page_size: Option<u32>,
) -> Result<EngineListResponse> {
    let url = endpoint_url(base_url, "engines")?;

    let mut query_params: Vec<(&str, String)> = Vec::new();
    if let Some(current) = page_current {
        query_params.push(("page[current]", current.to_string()));
    }
    if let Some(size) = page_size {
        query_params.push(("page[size]", size.to_string()));
    }

    debug!(url = %url, "GET engines");
    let builder = client.get(url).query(&query_params);
    let response = send_request(builder, api_key).await?;

    decode_json(response).await
}

/// Get a single engine (`GET engines/{name}`).
pub async fn get_engine(
    client: &Client,
    base_url: &Url,
    api_key: &str,
    name: &str,
) -> Result<Engine> {
    let url = endpoint_url(base_url, &format!("engines/{}", encode_path_segment(name)))?;

    debug!(url = %url, "GET engine");
    let response = send_request(client.get(url), api_key).await?;

    decode_json(response).await
}
