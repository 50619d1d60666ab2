use serde::{Deserialize, Serialize};

use crate::{Coordinate, Responder};

/// Body of `POST /api/request-responder`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RequestResponder {
    pub name: String,
    pub location: Coordinate,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RequestResponderResponse {
    pub name: String,
    pub responder: Option<Responder>,
    pub distance_km: Option<f64>,
    pub eta: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApiErrorBody {
    pub error: String,
}
