use axum::{
    routing::{get, post},
    Router,
};

use crate::{api::request_responder, realtime::ws_upgrade, state::ApiState};

/// Realtime channel and JSON API, ready to merge into the Leptos router.
pub fn router<S>(state: ApiState) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/ws", get(ws_upgrade))
        .route("/api/request-responder", post(request_responder))
        .with_state(state)
}
