//! HTTP interception for tests.
//!
//! Every [`InterceptedServer`] wraps a fresh wiremock [`MockServer`] with a
//! lowest-priority catch-all. Stubs mounted by a test take precedence; any
//! request no stub matches is answered with HTTP 501 and recorded, so the
//! call fails at its call site and the suite runner can fail the case even if
//! the error was swallowed.

use std::sync::{Arc, Mutex};

use app_search_config::constants::API_BASE_PATH;
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

use super::guard;

/// Status returned for requests no stub matched.
pub(crate) const UNMOCKED_STATUS: u16 = 501;

/// Responder for the catch-all mock. Records `METHOD path` of each request.
struct UnmockedResponder {
    seen: Arc<Mutex<Vec<String>>>,
}

impl Respond for UnmockedResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let description = format!("{} {}", request.method, request.url.path());
        tracing::error!(request = %description, "Unmocked request reached the interception server");

        let message = format!("unmocked request: {}", description);
        self.seen
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(description);

        ResponseTemplate::new(UNMOCKED_STATUS)
            .set_body_json(serde_json::json!({ "errors": [message] }))
    }
}

/// A mock server that rejects every request not explicitly stubbed.
pub struct InterceptedServer {
    server: MockServer,
    unmocked: Arc<Mutex<Vec<String>>>,
}

impl InterceptedServer {
    /// Start a server with the catch-all installed.
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let unmocked = Arc::new(Mutex::new(Vec::new()));

        Mock::given(any())
            .respond_with(UnmockedResponder {
                seen: Arc::clone(&unmocked),
            })
            .with_priority(u8::MAX)
            .named("unmocked request catch-all")
            .mount(&server)
            .await;

        guard::register(&server.uri());
        Self { server, unmocked }
    }

    /// Root URI of the server, e.g. `http://127.0.0.1:40123`.
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Endpoint to hand to a client so its requests land on this server.
    pub fn api_endpoint(&self) -> String {
        format!("{}{}", self.server.uri(), API_BASE_PATH)
    }

    /// Full path of an API resource as the client will request it, e.g.
    /// `api_path("engines")` is `/api/as/v1/engines`.
    pub fn api_path(&self, resource: &str) -> String {
        format!("{}{}", API_BASE_PATH, resource.trim_start_matches('/'))
    }

    /// Mount a stub.
    pub async fn mount(&self, mock: Mock) {
        mock.mount(&self.server).await;
    }

    /// Requests that reached the catch-all, as `METHOD path`.
    pub fn unmocked_requests(&self) -> Vec<String> {
        self.unmocked
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Drain the recorded unmocked requests.
    ///
    /// Tests that deliberately issue an unstubbed request call this to
    /// acknowledge it, so the suite runner does not fail the case.
    pub fn take_unmocked_requests(&self) -> Vec<String> {
        std::mem::take(
            &mut *self
                .unmocked
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner()),
        )
    }

    /// Panic if any request reached the catch-all.
    pub fn assert_all_mocked(&self) {
        let unmocked = self.unmocked_requests();
        assert!(
            unmocked.is_empty(),
            "Unmocked requests reached the interception server: {}",
            unmocked.join(", ")
        );
    }
}

impl Drop for InterceptedServer {
    fn drop(&mut self) {
        guard::deregister(&self.server.uri());
    }
}
