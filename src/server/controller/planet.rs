use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::{ErrorDto, ItemDto, ListDto},
        catalog::PlanetDto,
    },
    server::{
        controller::extract::{Json, Path},
        error::{not_found::NotFoundError, Error},
        model::{app::AppState, kind::EntityKind},
        service::catalog::CatalogService,
    },
};

pub static PLANET_TAG: &str = "planet";

/// List every planet
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Success when retrieving planets", body = ListDto<PlanetDto>),
        (status = 404, description = "No planets exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let catalog_service = CatalogService::new(&state.db);

    let planets = catalog_service.get_planets().await?;

    if planets.is_empty() {
        return Err(NotFoundError::Entities(EntityKind::Planet).into());
    }

    Ok((StatusCode::OK, Json(ListDto::ok(planets))))
}

/// Get a single planet by ID
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Success when retrieving planet", body = ItemDto<PlanetDto>),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let catalog_service = CatalogService::new(&state.db);

    let Some(planet) = catalog_service.get_planet(planet_id).await? else {
        return Err(NotFoundError::Entity {
            kind: EntityKind::Planet,
            id: planet_id,
        }
        .into());
    };

    Ok((StatusCode::OK, Json(ItemDto::ok(planet))))
}
