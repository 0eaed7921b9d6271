//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /users`, `GET /users/{id}`, `DELETE /users/{id}`
/// - `GET /characters`, `GET /characters/{id}`
/// - `GET /planets`, `GET /planets/{id}`
/// - `GET /vehicles`, `GET /vehicles/{id}`
/// - `GET /favorites/{user_id}`, `POST /favorites`
/// - `DELETE /favorite/character/{user_id}/{character_id}`
/// - `DELETE /favorite/planet/{user_id}/{planet_id}`
/// - `DELETE /favorite/vehicle/{user_id}/{vehicle_id}`
///
/// The OpenAPI specification is served at `/api/docs/openapi.json` and Swagger UI at
/// `/api/docs`.
///
/// # Returns
/// An Axum `Router<AppState>` without middleware; CORS and request tracing layers are
/// added by the caller.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Holocron favorites API"), tags(
        (name = controller::user::USER_TAG, description = "User routes"),
        (name = controller::character::CHARACTER_TAG, description = "Character catalog routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet catalog routes"),
        (name = controller::vehicle::VEHICLE_TAG, description = "Vehicle catalog routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite link routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::get_users))
        .routes(routes!(
            controller::user::get_user,
            controller::user::delete_user
        ))
        .routes(routes!(controller::character::get_characters))
        .routes(routes!(controller::character::get_character))
        .routes(routes!(controller::planet::get_planets))
        .routes(routes!(controller::planet::get_planet))
        .routes(routes!(controller::vehicle::get_vehicles))
        .routes(routes!(controller::vehicle::get_vehicle))
        .routes(routes!(controller::favorite::get_user_favorites))
        .routes(routes!(controller::favorite::add_favorite))
        .routes(routes!(controller::favorite::delete_favorite_character))
        .routes(routes!(controller::favorite::delete_favorite_planet))
        .routes(routes!(controller::favorite::delete_favorite_vehicle))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
