use axum::{
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use shared_types::ApiErrorBody;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoutingError {
    #[error("Underlying request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to parse JSON response: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Failed to read responder file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse responder file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };
        let body = ApiErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
