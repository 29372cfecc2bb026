//! In-process mock of the OneFootball Network API
//!
//! Serves the subset of the API the client exercises, backed by an
//! in-memory store keyed by external ID. Tests spawn it on an ephemeral
//! port and point the client's base URL at it. A `fail_next` knob injects
//! one arbitrary failure status (with optional Retry-After) into the next
//! posts request, for error-mapping and retry tests.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use chrono::{TimeZone, Utc};
use onefootball_network::{ClientConfig, Language, NewPost, OnefootballClient};
use serde_json::{Value, json};
use tokio::sync::Mutex;
use url::Url;

pub const LOGIN: &str = "partner";
pub const PASSWORD: &str = "secret";
pub const TOKEN: &str = "token-f00tba11";

#[derive(Default)]
pub struct ApiState {
    /// Stored posts keyed by external_id (uniqueness enforced)
    posts: Mutex<HashMap<String, Value>>,
    next_id: AtomicU64,
    /// Status (+ optional Retry-After seconds) for the next posts request
    fail_next: Mutex<Option<(u16, Option<u64>)>>,
}

/// A running mock API bound to an ephemeral local port
pub struct MockApi {
    pub addr: SocketAddr,
    pub state: Arc<ApiState>,
}

pub async fn spawn() -> MockApi {
    let state = Arc::new(ApiState::default());
    let app = router(state.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    MockApi { addr, state }
}

impl MockApi {
    /// Client configuration pointing at this mock
    pub fn config(&self) -> ClientConfig {
        let base_url = Url::parse(&format!("http://{}", self.addr)).unwrap();
        ClientConfig::with_base_url(base_url, LOGIN, PASSWORD)
    }

    /// An authenticated client pointing at this mock
    pub async fn client(&self) -> OnefootballClient {
        OnefootballClient::login(Arc::new(self.config()))
            .await
            .unwrap()
    }

    /// Make the next posts request fail with `status`
    pub async fn fail_next(&self, status: u16, retry_after: Option<u64>) {
        *self.state.fail_next.lock().await = Some((status, retry_after));
    }

    /// Number of stored posts
    pub async fn stored_posts(&self) -> usize {
        self.state.posts.lock().await.len()
    }
}

/// The article from the API documentation examples
pub fn sample_post(external_id: &str) -> NewPost {
    NewPost::new(
        external_id,
        Url::parse("https://example.com/a").unwrap(),
        Language::Fr,
        Utc.with_ymd_and_hms(2020, 8, 10, 8, 28, 58).unwrap(),
        "T",
        "<p>C</p>",
    )
}

fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/v1/login", post(login))
        .route("/v1/posts", post(create_post).get(list_posts))
        .route(
            "/v1/posts/{external_id}",
            axum::routing::patch(update_post).delete(delete_post),
        )
        .with_state(state)
}

fn error_body(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

fn require_auth(headers: &HeaderMap) -> Result<(), Response> {
    let expected = format!("Bearer {TOKEN}");
    match headers.get(header::AUTHORIZATION) {
        Some(value) if value.to_str().ok() == Some(expected.as_str()) => Ok(()),
        _ => Err(error_body(StatusCode::UNAUTHORIZED, "invalid token")),
    }
}

async fn take_failure(state: &ApiState) -> Option<Response> {
    let (status, retry_after) = state.fail_next.lock().await.take()?;
    let mut response = error_body(
        StatusCode::from_u16(status).unwrap(),
        "injected failure",
    );
    if let Some(secs) = retry_after {
        response
            .headers_mut()
            .insert(header::RETRY_AFTER, HeaderValue::from(secs));
    }
    Some(response)
}

async fn login(Json(body): Json<Value>) -> Response {
    let login = body.get("login").and_then(Value::as_str);
    let password = body.get("password").and_then(Value::as_str);
    if login == Some(LOGIN) && password == Some(PASSWORD) {
        Json(json!({ "access_token": TOKEN })).into_response()
    } else {
        error_body(StatusCode::UNAUTHORIZED, "bad credentials")
    }
}

async fn create_post(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Some(failure) = take_failure(&state).await {
        return failure;
    }
    if let Err(denied) = require_auth(&headers) {
        return denied;
    }

    let Some(external_id) = body.get("external_id").and_then(Value::as_str) else {
        return error_body(StatusCode::BAD_REQUEST, "external_id is required");
    };
    let external_id = external_id.to_string();

    let mut posts = state.posts.lock().await;
    if posts.contains_key(&external_id) {
        return error_body(StatusCode::CONFLICT, "external_id already exists");
    }

    let id = state.next_id.fetch_add(1, Ordering::SeqCst) + 1;
    let mut post = body;
    post["id"] = json!(id);
    post["synced"] = json!(false);
    posts.insert(external_id, post.clone());

    (StatusCode::CREATED, Json(post)).into_response()
}

async fn list_posts(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Some(failure) = take_failure(&state).await {
        return failure;
    }
    if let Err(denied) = require_auth(&headers) {
        return denied;
    }

    let external_id = params.get("external_id");
    let feed_item_id = params.get("feed_item_id");
    let posts = state.posts.lock().await;
    let matching: Vec<Value> = match (external_id, feed_item_id) {
        (Some(external_id), None) => posts
            .values()
            .filter(|p| p.get("external_id").and_then(Value::as_str) == Some(external_id))
            .cloned()
            .collect(),
        (None, Some(feed_item_ids)) => {
            let wanted: Vec<&str> = feed_item_ids.split(',').collect();
            posts
                .values()
                .filter(|p| {
                    p.get("id")
                        .and_then(Value::as_u64)
                        .is_some_and(|id| wanted.contains(&id.to_string().as_str()))
                })
                .cloned()
                .collect()
        }
        _ => return error_body(StatusCode::BAD_REQUEST, "exactly one filter is required"),
    };

    Json(json!({ "posts": matching })).into_response()
}

async fn update_post(
    State(state): State<Arc<ApiState>>,
    Path(external_id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Some(failure) = take_failure(&state).await {
        return failure;
    }
    if let Err(denied) = require_auth(&headers) {
        return denied;
    }

    let mut posts = state.posts.lock().await;
    let Some(post) = posts.get_mut(&external_id) else {
        return error_body(StatusCode::NOT_FOUND, "no such post");
    };

    if let Value::Object(fields) = body {
        for (key, value) in fields {
            post[key] = value;
        }
    }

    Json(post.clone()).into_response()
}

async fn delete_post(
    State(state): State<Arc<ApiState>>,
    Path(external_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Some(failure) = take_failure(&state).await {
        return failure;
    }
    if let Err(denied) = require_auth(&headers) {
        return denied;
    }

    let mut posts = state.posts.lock().await;
    if posts.remove(&external_id).is_some() {
        StatusCode::NO_CONTENT.into_response()
    } else {
        error_body(StatusCode::NOT_FOUND, "no such post")
    }
}
