//! HTTP controller endpoints for the Holocron web API.
//!
//! Axum handlers for users, the reference catalog and favorite links. Controllers extract
//! path and body parameters, call into the service layer and map empty results to 404s.
//! Every handler is annotated with utoipa for the OpenAPI document.

pub mod character;
pub mod extract;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod vehicle;
