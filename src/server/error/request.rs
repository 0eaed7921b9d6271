use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Requests rejected by an extractor before reaching a handler
#[derive(Error, Debug)]
pub enum RequestError {
    /// Body missing, not JSON, or not shaped like the expected object
    #[error("Invalid request body: {}", .0.body_text())]
    Body(#[from] JsonRejection),
    /// Path segment that does not parse into the expected ID type
    #[error("Invalid path parameter: {}", .0.body_text())]
    Path(#[from] PathRejection),
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto::new(self.to_string())),
        )
            .into_response()
    }
}
