use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::model::kind::EntityKind};

/// A requested record, or every record of a table, is missing
///
/// The messages keep "the link is missing" apart from "the user or entity is missing"
/// so clients can tell the two 404s on favorite deletion apart.
#[derive(Error, Debug)]
pub enum NotFoundError {
    #[error("Users not found")]
    Users,
    #[error("{} not found", .0.plural_title())]
    Entities(EntityKind),
    #[error("User not found")]
    User(i32),
    #[error("{} not found", .kind.title())]
    Entity { kind: EntityKind, id: i32 },
    #[error("Favorite {kind} not found")]
    Favorite {
        kind: EntityKind,
        user_id: i32,
        entity_id: i32,
    },
    #[error("No favorites found for user")]
    Favorites(i32),
}

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        match &self {
            Self::Users | Self::Entities(_) => {
                tracing::debug!("{}", self);
            }
            Self::User(user_id) | Self::Favorites(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);
            }
            Self::Entity { kind, id } => {
                tracing::debug!(kind = %kind, id = %id, "{}", self);
            }
            Self::Favorite {
                kind,
                user_id,
                entity_id,
            } => {
                tracing::debug!(
                    kind = %kind,
                    user_id = %user_id,
                    entity_id = %entity_id,
                    "{}",
                    self
                );
            }
        }

        (StatusCode::NOT_FOUND, Json(ErrorDto::new(self.to_string()))).into_response()
    }
}
