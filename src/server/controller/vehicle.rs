use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::{ErrorDto, ItemDto, ListDto},
        catalog::VehicleDto,
    },
    server::{
        controller::extract::{Json, Path},
        error::{not_found::NotFoundError, Error},
        model::{app::AppState, kind::EntityKind},
        service::catalog::CatalogService,
    },
};

pub static VEHICLE_TAG: &str = "vehicle";

/// List every vehicle
#[utoipa::path(
    get,
    path = "/vehicles",
    tag = VEHICLE_TAG,
    responses(
        (status = 200, description = "Success when retrieving vehicles", body = ListDto<VehicleDto>),
        (status = 404, description = "No vehicles exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicles(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let catalog_service = CatalogService::new(&state.db);

    let vehicles = catalog_service.get_vehicles().await?;

    if vehicles.is_empty() {
        return Err(NotFoundError::Entities(EntityKind::Vehicle).into());
    }

    Ok((StatusCode::OK, Json(ListDto::ok(vehicles))))
}

/// Get a single vehicle by ID
#[utoipa::path(
    get,
    path = "/vehicles/{id}",
    tag = VEHICLE_TAG,
    params(("id" = i32, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Success when retrieving vehicle", body = ItemDto<VehicleDto>),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let catalog_service = CatalogService::new(&state.db);

    let Some(vehicle) = catalog_service.get_vehicle(vehicle_id).await? else {
        return Err(NotFoundError::Entity {
            kind: EntityKind::Vehicle,
            id: vehicle_id,
        }
        .into());
    };

    Ok((StatusCode::OK, Json(ItemDto::ok(vehicle))))
}
