#![allow(dead_code)]

use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get as get_route;
use axum::Router;
use http_body_util::BodyExt;
use randomizer_api::config::ServerConfig;
use randomizer_api::router::build_app_router;
use randomizer_api::state::AppState;
use randomizer_discogs::{DiscogsClient, DiscogsConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

pub const TEST_TOKEN: &str = "test-token";

/// Build a test `ServerConfig` pointing at the given Discogs base URL.
pub fn test_config(discogs_base_url: String) -> ServerConfig {
    ServerConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        request_timeout_secs: 30,
        discogs: DiscogsConfig {
            base_url: discogs_base_url,
            ..DiscogsConfig::new(TEST_TOKEN)
        },
    }
}

/// Build the full application router with all middleware layers, talking to
/// the Discogs API at `discogs_base_url`.
pub fn build_test_app(discogs_base_url: String) -> Router {
    build_test_app_with_timeout(discogs_base_url, 30)
}

/// Same as [`build_test_app`] with a custom request timeout.
pub fn build_test_app_with_timeout(discogs_base_url: String, timeout_secs: u64) -> Router {
    let config = ServerConfig {
        request_timeout_secs: timeout_secs,
        ..test_config(discogs_base_url)
    };
    let state = AppState {
        discogs: Arc::new(DiscogsClient::new(config.discogs.clone())),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, method: Method, uri: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri).await
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Mock Discogs server
// ---------------------------------------------------------------------------

/// A request received by the mock Discogs server.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub query: HashMap<String, String>,
}

#[derive(Debug, Clone)]
struct MockResponse {
    status: StatusCode,
    body: String,
}

impl MockResponse {
    fn ok(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.to_string(),
        }
    }
}

impl IntoResponse for MockResponse {
    fn into_response(self) -> Response {
        (self.status, [(CONTENT_TYPE, "application/json")], self.body).into_response()
    }
}

/// Scripted stand-in for the Discogs API.
///
/// The count lookup (no `page` parameter), sampled searches and release
/// lookups each return one fixed response. By default every sampled page
/// yields release `4242`, whose detail has no videos.
#[derive(Clone)]
pub struct MockDiscogs {
    count: MockResponse,
    page: MockResponse,
    detail: MockResponse,
    delay: Option<Duration>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockDiscogs {
    pub fn with_items(items: u64) -> Self {
        Self {
            count: MockResponse::ok(json!({
                "pagination": { "page": 1, "pages": items, "per_page": 1, "items": items },
                "results": []
            })),
            page: MockResponse::ok(json!({
                "pagination": { "items": items },
                "results": [{ "id": 4242, "title": "Some Artist - Some Album" }]
            })),
            detail: MockResponse::ok(json!({ "id": 4242, "title": "Some Album", "videos": [] })),
            delay: None,
            requests: Arc::default(),
        }
    }

    pub fn count_error(mut self, status: StatusCode, body: &str) -> Self {
        self.count = MockResponse {
            status,
            body: body.to_string(),
        };
        self
    }

    pub fn page_error(mut self, status: StatusCode, body: &str) -> Self {
        self.page = MockResponse {
            status,
            body: body.to_string(),
        };
        self
    }

    pub fn detail(mut self, body: Value) -> Self {
        self.detail = MockResponse::ok(body);
        self
    }

    /// Hold every search response for `delay` before answering.
    pub fn slow(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Serve the mock on an ephemeral local port and return its base URL.
    pub async fn spawn(&self) -> String {
        let router = Router::new()
            .route("/database/search", get_route(mock_search))
            .route("/releases/{id}", get_route(mock_release))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, path: String, query: HashMap<String, String>) {
        self.requests.lock().unwrap().push(Recorded { path, query });
    }
}

async fn mock_search(
    State(mock): State<MockDiscogs>,
    Query(query): Query<HashMap<String, String>>,
) -> MockResponse {
    let sampled = query.contains_key("page");
    mock.record("/database/search".into(), query);
    if let Some(delay) = mock.delay {
        tokio::time::sleep(delay).await;
    }
    if sampled {
        mock.page.clone()
    } else {
        mock.count.clone()
    }
}

async fn mock_release(
    State(mock): State<MockDiscogs>,
    Path(id): Path<u64>,
    Query(query): Query<HashMap<String, String>>,
) -> MockResponse {
    mock.record(format!("/releases/{id}"), query);
    mock.detail.clone()
}
