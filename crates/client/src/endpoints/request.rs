//! Request execution and error-response mapping.
//!
//! Requests are sent exactly once. Non-success responses are converted to
//! [`ClientError`] with the API's `{"errors": [...]}` messages joined.

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::ApiErrors;

/// Attach the bearer token and send the request.
///
/// # Errors
///
/// - `ClientError::Unauthorized` for HTTP 401
/// - `ClientError::NotFound` for HTTP 404
/// - `ClientError::ApiError` for any other non-success status
/// - `ClientError::HttpError` for transport failures
pub async fn send_request(builder: RequestBuilder, api_key: &str) -> Result<Response> {
    let response = builder
        .bearer_auth(api_key)
        .header("Content-Type", "application/json")
        .send()
        .await?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());
    let message = match serde_json::from_str::<ApiErrors>(&body) {
        Ok(parsed) if !parsed.errors.is_empty() => parsed.errors.join("; "),
        _ => body,
    };

    debug!(status = status.as_u16(), url = %url, "Request failed");

    Err(match status.as_u16() {
        401 => ClientError::Unauthorized(message),
        404 => ClientError::NotFound(message),
        status => ClientError::ApiError {
            status,
            url,
            message,
        },
    })
}

/// Decode a JSON response body, reporting decode failures as invalid responses.
pub(crate) async fn decode_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
}
