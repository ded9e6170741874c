//! In-process stand-in for the store API.
//!
//! Every request is recorded before it is routed. Answers mirror an empty
//! store:
//! - `POST` -> 201
//! - `GET /orders` and `GET /catalogue` -> 200
//! - anything else -> 404 (an empty store knows no order ids)

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Router,
};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tower::ServiceBuilder;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path plus query string, as sent.
    pub path: String,
    /// Header names are lowercase.
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

struct StubState {
    catalogue: String,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct StoreStub {
    pub base_url: String,
    state: Arc<StubState>,
}

impl StoreStub {
    /// Start the stub on an ephemeral loopback port. `catalogue` is served on `GET /catalogue`.
    pub async fn start(catalogue: &str) -> Self {
        let state = Arc::new(StubState {
            catalogue: catalogue.to_string(),
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/orders", get(list_orders).post(created))
            .route("/orders/:id", get(not_found))
            .route("/orders/:id/cancel", delete(not_found))
            .route("/orders/:id/complete", put(not_found))
            .route("/catalogue", get(catalogue_listing))
            .route("/products", post(created))
            .layer(ServiceBuilder::new().layer(middleware::from_fn_with_state(
                Arc::clone(&state),
                record,
            )))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind store stub");
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, state }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

/// Status the stub answers with for `method` on `path`. Matches the router above.
pub fn status_for(method: &str, path: &str) -> u16 {
    let path = path.split('?').next().unwrap_or(path);
    match (method, path) {
        ("POST", _) => 201,
        ("GET", "/orders") | ("GET", "/catalogue") => 200,
        _ => 404,
    }
}

async fn record(State(state): State<Arc<StubState>>, request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(_) => return StatusCode::BAD_REQUEST.into_response(),
    };

    let path = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| parts.uri.path().to_string());
    let headers = parts
        .headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();

    state.requests.lock().unwrap().push(RecordedRequest {
        method: parts.method.to_string(),
        path,
        headers,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    });

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

async fn list_orders() -> Response {
    (StatusCode::OK, [("Content-Type", "application/json")], "[]").into_response()
}

async fn created() -> StatusCode {
    StatusCode::CREATED
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

async fn catalogue_listing(State(state): State<Arc<StubState>>) -> Response {
    (
        StatusCode::OK,
        [("Content-Type", "application/json")],
        state.catalogue.clone(),
    )
        .into_response()
}
