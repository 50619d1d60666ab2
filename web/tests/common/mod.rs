#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, RawQuery, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};
use serde_json::{json, Value};

/// Requests seen by a stub routing service, as `path?query`.
pub type Seen = Arc<Mutex<Vec<String>>>;

#[derive(Clone)]
struct StubState {
    body: String,
    seen: Seen,
}

pub async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Starts an OSRM look-alike that answers every driving request with `body`.
pub async fn spawn_osrm(body: impl Into<String>) -> (String, Seen) {
    let seen: Seen = Arc::default();
    let state = StubState {
        body: body.into(),
        seen: seen.clone(),
    };
    let app = Router::new()
        .route("/route/v1/driving/*coords", get(driving))
        .with_state(state);

    let addr = serve(app).await;
    (format!("http://{}", addr), seen)
}

async fn driving(
    State(state): State<StubState>,
    Path(coords): Path<String>,
    RawQuery(query): RawQuery,
) -> impl IntoResponse {
    state
        .seen
        .lock()
        .unwrap()
        .push(format!("{}?{}", coords, query.unwrap_or_default()));
    ([(header::CONTENT_TYPE, "application/json")], state.body)
}

/// A base URL nothing is listening on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn chennai_route() -> Value {
    json!({
        "code": "Ok",
        "routes": [{
            "geometry": {
                "type": "LineString",
                "coordinates": [[80.2707, 13.0827], [80.2550, 13.0750], [80.2377, 13.0674]]
            },
            "duration": 545.2,
            "distance": 5123.4
        }]
    })
}

pub fn no_routes() -> Value {
    json!({ "code": "NoRoute", "message": "Impossible route between points", "routes": [] })
}
