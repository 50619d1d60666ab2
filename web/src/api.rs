use axum::{extract::State, Json};
use shared_types::{nearest_responder, Eta, RequestResponder, RequestResponderResponse};

use crate::{error::ApiError, state::ApiState};

/// `POST /api/request-responder`: picks the nearest responder for the caller
/// and estimates how long it would take to reach them.
pub async fn request_responder(
    State(state): State<ApiState>,
    Json(request): Json<RequestResponder>,
) -> Result<Json<RequestResponderResponse>, ApiError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(ApiError::BadRequest("name must not be empty".to_string()));
    }

    let location = request.location;
    let nearest = nearest_responder(location, state.registry.responders())
        .map(|nearest| (nearest.responder.clone(), nearest.distance_km));

    let response = match nearest {
        Some((responder, distance_km)) => {
            tracing::info!(
                "Assigning {} to {} ({:.2} km away)",
                responder.name,
                name,
                distance_km
            );
            let eta = state
                .routing
                .travel_time(location, responder.coordinate())
                .await;
            RequestResponderResponse {
                name: name.to_string(),
                responder: Some(responder),
                distance_km: Some(distance_km),
                eta: eta.to_string(),
            }
        }
        None => {
            tracing::info!("No responders available within the radius of {}", name);
            RequestResponderResponse {
                name: name.to_string(),
                responder: None,
                distance_km: None,
                eta: Eta::Unavailable.to_string(),
            }
        }
    };

    Ok(Json(response))
}
