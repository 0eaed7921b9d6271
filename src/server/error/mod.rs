//! Error types for the Holocron server application.
//!
//! Domain errors live in their own modules (configuration, favorites validation, missing
//! records) and are aggregated into [`Error`]. Every error type implements `IntoResponse`
//! so handlers can return `Result<_, Error>` and rely on `?` for status code mapping.

pub mod config;
pub mod favorite;
pub mod not_found;
pub mod request;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError, favorite::FavoriteError, not_found::NotFoundError,
        request::RequestError,
    },
};

/// Main error type for the Holocron server application.
///
/// # Error Categories
/// - Configuration errors (invalid environment variables)
/// - Malformed requests rejected by an extractor (bad JSON body, non-numeric path ID)
/// - Favorite request errors (missing or malformed IDs, constraint violations)
/// - Missing records (users, reference entities, favorite links)
/// - Database errors (query failures, connection issues)
/// - Listener I/O errors during startup
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Request rejected by the body or path extractor.
    #[error(transparent)]
    RequestError(#[from] RequestError),
    /// Favorite request rejected before or while writing to the database.
    #[error(transparent)]
    FavoriteError(#[from] FavoriteError),
    /// A requested record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error from binding or serving the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        RequestError::from(rejection).into()
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        RequestError::from(rejection).into()
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Malformed body or path, or missing or malformed IDs in a favorite request
/// - 404 Not Found - Missing users, reference entities or favorite links
/// - 409 Conflict - A favorite references a row that disappeared mid-request
/// - 500 Internal Server Error - Everything else, with the raw diagnostic attached
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::RequestError(err) => err.into_response(),
            Self::FavoriteError(err) => err.into_response(),
            Self::NotFound(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The error is logged and its message is returned to the client in the `message` field.
/// This service is meant for internal use; the diagnostic leak is accepted there.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
                message: Some(self.0.to_string()),
            }),
        )
            .into_response()
    }
}
