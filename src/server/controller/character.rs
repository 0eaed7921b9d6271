use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::{ErrorDto, ItemDto, ListDto},
        catalog::CharacterDto,
    },
    server::{
        controller::extract::{Json, Path},
        error::{not_found::NotFoundError, Error},
        model::{app::AppState, kind::EntityKind},
        service::catalog::CatalogService,
    },
};

pub static CHARACTER_TAG: &str = "character";

/// List every character
#[utoipa::path(
    get,
    path = "/characters",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "Success when retrieving characters", body = ListDto<CharacterDto>),
        (status = 404, description = "No characters exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let catalog_service = CatalogService::new(&state.db);

    let characters = catalog_service.get_characters().await?;

    if characters.is_empty() {
        return Err(NotFoundError::Entities(EntityKind::Character).into());
    }

    Ok((StatusCode::OK, Json(ListDto::ok(characters))))
}

/// Get a single character by ID
#[utoipa::path(
    get,
    path = "/characters/{id}",
    tag = CHARACTER_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "Success when retrieving character", body = ItemDto<CharacterDto>),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    Path(character_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let catalog_service = CatalogService::new(&state.db);

    let Some(character) = catalog_service.get_character(character_id).await? else {
        return Err(NotFoundError::Entity {
            kind: EntityKind::Character,
            id: character_id,
        }
        .into());
    };

    Ok((StatusCode::OK, Json(ItemDto::ok(character))))
}
