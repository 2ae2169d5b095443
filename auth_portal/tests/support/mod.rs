// Shared bootstrapping for integration tests: a stub of the remote auth API
// and a portal wired to it, both on ephemeral ports.
#![allow(dead_code)]

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const SESSION_COOKIE: &str = "session=abc; Path=/; HttpOnly";

// Everything the stub saw, so tests can assert on upstream traffic.
#[derive(Clone, Default)]
pub struct StubRecord {
    hits: Arc<AtomicUsize>,
    cookies: Arc<Mutex<Vec<Option<String>>>>,
    bodies: Arc<Mutex<Vec<Value>>>,
}

impl StubRecord {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn cookies(&self) -> Vec<Option<String>> {
        self.cookies.lock().expect("cookies mutex poisoned").clone()
    }

    pub fn bodies(&self) -> Vec<Value> {
        self.bodies.lock().expect("bodies mutex poisoned").clone()
    }

    fn observe(&self, headers: &HeaderMap, body: Option<Value>) {
        self.hits.fetch_add(1, Ordering::SeqCst);
        let cookie = headers
            .get(header::COOKIE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        self.cookies.lock().expect("cookies mutex poisoned").push(cookie);
        if let Some(body) = body {
            self.bodies.lock().expect("bodies mutex poisoned").push(body);
        }
    }
}

pub struct StubAuthApi {
    pub base_url: String,
    pub record: StubRecord,
}

async fn login(
    State(record): State<StubRecord>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    record.observe(&headers, Some(body.clone()));
    if body["email"] == "ada@example.com" && body["password"] == "secret1" {
        (
            StatusCode::OK,
            [(header::SET_COOKIE, SESSION_COOKIE)],
            Json(json!({ "user": { "email": "ada@example.com" } })),
        )
            .into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Invalid credentials" })),
        )
            .into_response()
    }
}

async fn signup(
    State(record): State<StubRecord>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    record.observe(&headers, Some(body.clone()));
    match body["email"].as_str() {
        Some("taken@example.com") => (
            StatusCode::CONFLICT,
            Json(json!({ "code": "already_registered", "message": "Email already registered" })),
        )
            .into_response(),
        // Plain-text failure body exercises the status fallback.
        Some("flaky@example.com") => (StatusCode::INTERNAL_SERVER_ERROR, "oops").into_response(),
        _ => (
            StatusCode::CREATED,
            Json(json!({ "message": "Verification email sent" })),
        )
            .into_response(),
    }
}

async fn session(State(record): State<StubRecord>, headers: HeaderMap) -> Json<Value> {
    record.observe(&headers, None);
    let active = headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains("session=abc"));
    if active {
        Json(json!({ "user": { "email": "ada@example.com" } }))
    } else {
        Json(json!({ "user": null }))
    }
}

async fn hello(State(record): State<StubRecord>, headers: HeaderMap) -> Json<Value> {
    record.observe(&headers, None);
    Json(json!({ "message": "Hello, world!" }))
}

// Start the stub auth API on an ephemeral port.
pub async fn spawn_stub_auth_api() -> StubAuthApi {
    let record = StubRecord::default();
    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/session", get(session))
        .route("/api/hello", get(hello))
        .with_state(record.clone());

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral stub port");
    let addr = listener.local_addr().expect("get stub addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server failed");
    });

    StubAuthApi {
        base_url: format!("http://{addr}"),
        record,
    }
}

// Start the portal pointed at `auth_api_url` and return its base URL.
pub async fn spawn_portal(auth_api_url: Option<String>) -> String {
    let config = auth_portal::PortalConfig {
        auth_api_url,
        host: "127.0.0.1".parse().expect("loopback parses"),
        port: 0,
    };
    // The listener is bound before spawning, so connects succeed immediately.
    let listener = TcpListener::bind(config.addr())
        .await
        .expect("bind ephemeral portal port");
    let addr = listener.local_addr().expect("get portal addr");
    tokio::spawn(async move {
        auth_portal::run(listener, config)
            .await
            .expect("portal server failed");
    });
    format!("http://{addr}")
}

// An address nothing listens on, for transport failure tests.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind throwaway port");
    let addr = listener.local_addr().expect("get throwaway addr");
    drop(listener);
    format!("http://{addr}")
}

// Browser stand-in: follows no redirects so tests can inspect them.
pub fn browser() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("build test client")
}

pub async fn post_form(
    client: &reqwest::Client,
    url: &str,
    body: &str,
) -> reqwest::Response {
    client
        .post(url)
        .header(
            reqwest::header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(body.to_string())
        .send()
        .await
        .expect("request should succeed")
}
