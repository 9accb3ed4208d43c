//! Seeded, randomized suite for the App Search client.
//!
//! This binary runs without the libtest harness. `main` bootstraps the
//! harness once, then runs every case in an order derived from the seed it
//! prints. Reproduce an order with:
//!
//!     cargo test -p app-search-client --test app_search_suite -- --seed 1234
//!
//! or by exporting `APP_SEARCH_TEST_SEED`.

use app_search_client::testing::{Harness, HarnessConfig, Suite, TestContext, load_fixture};
use app_search_client::{AppSearchClient, ClientError, ClientOptions, SearchOptions};
use secrecy::ExposeSecret;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn suite() -> Suite {
    Suite::new()
        .case("credentials resolve to equal values twice", credentials_are_stable)
        .case("credentials omit unset endpoint", credentials_omit_unset_endpoint)
        .case("credentials keep explicit endpoint", credentials_keep_explicit_endpoint)
        .case("client targets interception server", client_targets_server)
        .case("list engines sends bearer key", list_engines_sends_bearer_key)
        .case("list engines forwards paging", list_engines_forwards_paging)
        .case("get engine maps not found", get_engine_maps_not_found)
        .case("search posts query and page", search_posts_query_and_page)
        .case("unstubbed request is rejected", unstubbed_request_is_rejected)
        .case("client built outside the context is refused", direct_client_is_refused)
}

async fn credentials_are_stable(ctx: TestContext) -> anyhow::Result<()> {
    anyhow::ensure!(
        ctx.credentials() == ctx.credentials(),
        "two resolutions under the same environment differ"
    );
    Ok(())
}

async fn credentials_omit_unset_endpoint(ctx: TestContext) -> anyhow::Result<()> {
    let options = temp_env::with_vars(
        [
            ("AS_API_KEY", Some("private-suite")),
            ("AS_ACCOUNT_HOST_KEY", Some("host-suite1")),
            ("AS_API_ENDPOINT", None),
        ],
        || ctx.credentials(),
    );
    anyhow::ensure!(options.api_key().expose_secret() == "private-suite");
    anyhow::ensure!(options.account_host_key() == "host-suite1");
    anyhow::ensure!(
        options.api_endpoint().is_none(),
        "endpoint should be absent, got {:?}",
        options.api_endpoint()
    );
    Ok(())
}

async fn credentials_keep_explicit_endpoint(ctx: TestContext) -> anyhow::Result<()> {
    let options = temp_env::with_var(
        "AS_API_ENDPOINT",
        Some("https://example.api-endpoint.io"),
        || ctx.credentials(),
    );
    anyhow::ensure!(options.api_endpoint() == Some("https://example.api-endpoint.io"));
    Ok(())
}

async fn client_targets_server(ctx: TestContext) -> anyhow::Result<()> {
    let server = ctx.server()?;
    let client = ctx.client()?;
    anyhow::ensure!(
        client.base_url().as_str() == server.api_endpoint(),
        "client base URL {} does not point at {}",
        client.base_url(),
        server.api_endpoint()
    );
    Ok(())
}

async fn list_engines_sends_bearer_key(ctx: TestContext) -> anyhow::Result<()> {
    let server = ctx.server()?;
    let options = ctx.client_options();
    let bearer = format!("Bearer {}", options.api_key().expose_secret());

    server
        .mount(
            Mock::given(method("GET"))
                .and(path(server.api_path("engines")))
                .and(header("authorization", bearer.as_str()))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_json(load_fixture("engines/list_engines.json")),
                ),
        )
        .await;

    let resp = ctx.client()?.list_engines(None, None).await?;
    anyhow::ensure!(resp.results.len() == 2);
    Ok(())
}

async fn list_engines_forwards_paging(ctx: TestContext) -> anyhow::Result<()> {
    let server = ctx.server()?;
    server
        .mount(
            Mock::given(method("GET"))
                .and(path(server.api_path("engines")))
                .and(query_param("page[current]", "3"))
                .and(query_param("page[size]", "5"))
                .respond_with(
                    ResponseTemplate::new(200).set_body_json(serde_json::json!({
                        "meta": {
                            "page": {"current": 3, "total_pages": 3, "total_results": 11, "size": 5}
                        },
                        "results": [{"name": "last-engine", "type": "default"}]
                    })),
                ),
        )
        .await;

    let resp = ctx.client()?.list_engines(Some(3), Some(5)).await?;
    anyhow::ensure!(resp.meta.page.current == 3);
    anyhow::ensure!(resp.results[0].name == "last-engine");
    Ok(())
}

async fn get_engine_maps_not_found(ctx: TestContext) -> anyhow::Result<()> {
    let server = ctx.server()?;
    server
        .mount(
            Mock::given(method("GET"))
                .and(path(server.api_path("engines/gone")))
                .respond_with(
                    ResponseTemplate::new(404)
                        .set_body_json(serde_json::json!({"errors": ["Could not find engine."]})),
                ),
        )
        .await;

    match ctx.client()?.get_engine("gone").await {
        Err(ClientError::NotFound(message)) => {
            anyhow::ensure!(message == "Could not find engine.");
            Ok(())
        }
        other => anyhow::bail!("expected NotFound, got {:?}", other),
    }
}

async fn search_posts_query_and_page(ctx: TestContext) -> anyhow::Result<()> {
    let server = ctx.server()?;
    server
        .mount(
            Mock::given(method("POST"))
                .and(path(server.api_path("engines/national-parks-demo/search")))
                .and(body_json(serde_json::json!({
                    "query": "mountains",
                    "page": {"current": 2}
                })))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_json(load_fixture("search/search_results.json")),
                ),
        )
        .await;

    let options = SearchOptions {
        page_current: Some(2),
        page_size: None,
    };
    let resp = ctx
        .client()?
        .search("national-parks-demo", "mountains", &options)
        .await?;
    anyhow::ensure!(resp.results[1]["id"]["raw"] == "park_great-smoky-mountains");
    Ok(())
}

async fn unstubbed_request_is_rejected(ctx: TestContext) -> anyhow::Result<()> {
    match ctx.client()?.get_engine("never-stubbed").await {
        Err(err) if err.status() == Some(501) => {}
        other => anyhow::bail!("expected a 501 rejection, got {:?}", other),
    }
    // Draining acknowledges the rejection so the runner does not fail the case.
    let unmocked = ctx.server()?.take_unmocked_requests();
    anyhow::ensure!(unmocked == ["GET /api/as/v1/engines/never-stubbed"]);
    Ok(())
}

async fn direct_client_is_refused(_ctx: TestContext) -> anyhow::Result<()> {
    let options = ClientOptions::new("private-suite", "host-suite1");
    match AppSearchClient::builder().from_options(&options).build() {
        Err(ClientError::UninterceptedEndpoint(url)) => {
            anyhow::ensure!(url == "https://host-suite1.api.swiftype.com/api/as/v1/");
            Ok(())
        }
        other => anyhow::bail!("expected the default endpoint to be refused, got {:?}", other),
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let suite = suite();

    if args.iter().any(|arg| arg == "--list") {
        for name in suite.names() {
            println!("{}: test", name);
        }
        return;
    }

    let config = match HarnessConfig::from_env_and_args(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(2);
        }
    };
    let harness = match Harness::bootstrap(config) {
        Ok(harness) => harness,
        Err(err) => {
            eprintln!("error: harness bootstrap failed: {}", err);
            std::process::exit(2);
        }
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to build tokio runtime");
    runtime.block_on(suite.run(harness)).exit();
}
