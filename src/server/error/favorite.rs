use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::model::kind::EntityKind};

/// Errors raised while validating or storing a favorite link
#[derive(Error, Debug)]
pub enum FavoriteError {
    #[error("Missing user_id")]
    MissingUserId,
    #[error("Missing character_id, planet_id or vehicle_id")]
    MissingTarget,
    #[error("Invalid value for {field}: {value}")]
    InvalidId { field: &'static str, value: String },
    /// The store rejected the insert because the user or target row no longer exists
    #[error("Favorite {kind} references a user or {kind} that does not exist")]
    ConstraintViolation { kind: EntityKind, reason: String },
}

impl IntoResponse for FavoriteError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingUserId | Self::MissingTarget | Self::InvalidId { .. } => {
                tracing::debug!("Rejected favorite request: {}", self);

                StatusCode::BAD_REQUEST
            }
            Self::ConstraintViolation { kind, reason } => {
                tracing::debug!(
                    kind = %kind,
                    reason = %reason,
                    "{}",
                    self
                );

                StatusCode::CONFLICT
            }
        };

        (status, Json(ErrorDto::new(self.to_string()))).into_response()
    }
}
