//! Search API methods for [`AppSearchClient`].

use crate::client::AppSearchClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{SearchOptions, SearchResponse};

impl AppSearchClient {
    /// Run a full-text query against an engine.
    pub async fn search(
        &self,
        engine: &str,
        query: &str,
        options: &SearchOptions,
    ) -> Result<SearchResponse> {
        endpoints::search(
            &self.http,
            &self.base_url,
            self.api_key(),
            engine,
            query,
            options,
        )
        .await
    }
}
