//! Search endpoint.

use reqwest::Client;
use serde::Serialize;
use tracing::debug;
use url::Url;

use super::request::decode_json;
use crate::endpoints::{encode_path_segment, endpoint_url, send_request};
use crate::error::Result;
use crate::models::{SearchOptions, SearchResponse};

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<PageRequest>,
}

#[derive(Debug, Serialize)]
struct PageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    current: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<u32>,
}

impl<'a> SearchRequest<'a> {
    fn new(query: &'a str, options: &SearchOptions) -> Self {
        let page = (options.page_current.is_some() || options.page_size.is_some()).then_some(
            PageRequest {
                current: options.page_current,
                size: options.page_size,
            },
        );
        Self { query, page }
    }
}

/// Search an engine (`POST engines/{engine}/search`).
pub async fn search(
    client: &Client,
    base_url: &Url,
    api_key: &str,
    engine: &str,
    query: &str,
    options: &SearchOptions,
) -> Result<SearchResponse> {
    let url = endpoint_url(
        base_url,
        &format!("engines/{}/search", encode_path_segment(engine)),
    )?;

    debug!(url = %url, "POST search");
    let builder = client.post(url).json(&SearchRequest::new(query, options));
    let response = send_request(builder, api_key).await?;

    decode_json(response).await
}
