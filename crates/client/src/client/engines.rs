//! Engine API methods for [`AppSearchClient`].

use crate::client::AppSearchClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Engine, EngineListResponse};

impl AppSearchClient {
    /// List engines, one page at a time.
    pub async fn list_engines(
        &self,
        page_current: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<EngineListResponse> {
        endpoints::list_engines(
            &self.http,
            &self.base_url,
            self.api_key(),
            page_current,
            page_size,
        )
        .await
    }

    /// Get a single engine by name.
    pub async fn get_engine(&self, name: &str) -> Result<Engine> {
        endpoints::get_engine(&self.http, &self.base_url, self.api_key(), name).await
    }
}
