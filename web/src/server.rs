use leptos::prelude::*;
use leptos::server;
use shared_types::{Coordinate, Route};

#[cfg(feature = "ssr")]
use crate::state::ApiState;

#[cfg(feature = "ssr")]
fn api_state() -> Result<ApiState, ServerFnError> {
    use_context::<ApiState>().ok_or_else(|| ServerFnError::new("Routing service is not configured"))
}

/// Driving route between two points, or `None` when the routing service has
/// nothing (or fails).
#[server]
pub async fn fetch_route(start: Coordinate, end: Coordinate) -> Result<Option<Route>, ServerFnError> {
    let state = api_state()?;
    Ok(state.routing.route_geometry(start, end).await)
}

/// Travel time as popup text: "12 min", or "N/A" when unknown.
#[server]
pub async fn fetch_travel_time(start: Coordinate, end: Coordinate) -> Result<String, ServerFnError> {
    let state = api_state()?;
    Ok(state.routing.travel_time(start, end).await.to_string())
}
