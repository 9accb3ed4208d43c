//! REST API endpoint implementations.
//!
//! Each function takes the HTTP client, the base URL, and the API key
//! explicitly so it can be exercised against a mock server without a
//! fully built [`AppSearchClient`](crate::AppSearchClient).

mod engines;
mod request;
mod search;
pub mod url_encoding;

pub use engines::{get_engine, list_engines};
pub use request::send_request;
pub use search::search;
pub use url_encoding::encode_path_segment;

use url::Url;

use crate::error::{ClientError, Result};

/// Join a relative path onto the base URL.
pub(crate) fn endpoint_url(base_url: &Url, path: &str) -> Result<Url> {
    base_url
        .join(path)
        .map_err(|e| ClientError::InvalidUrl(format!("Invalid endpoint path {}: {}", path, e)))
}
