use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::{AddFavoriteDto, FavoriteDto, UserFavoritesDto},
    },
    server::{
        controller::extract::{Json, Path},
        error::{not_found::NotFoundError, Error},
        model::{app::AppState, kind::EntityKind},
        service::favorite::FavoriteService,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

/// List every favorite of a user, grouped by kind
///
/// A user without any favorites is reported as not found.
#[utoipa::path(
    get,
    path = "/favorites/{user_id}",
    tag = FAVORITE_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Success when retrieving favorites", body = UserFavoritesDto),
        (status = 404, description = "User not found or user has no favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    let favorites = favorite_service.list_for_user(user_id).await?;

    if favorites.is_empty() {
        return Err(NotFoundError::Favorites(user_id).into());
    }

    Ok((StatusCode::OK, Json(favorites)))
}

/// Add a character, planet or vehicle to a user's favorites
///
/// When more than one target ID is supplied, `character_id` takes precedence over
/// `planet_id`, which takes precedence over `vehicle_id`.
#[utoipa::path(
    post,
    path = "/favorites",
    tag = FAVORITE_TAG,
    request_body = AddFavoriteDto,
    responses(
        (status = 201, description = "Favorite created", body = FavoriteDto),
        (status = 400, description = "Missing or malformed user or target ID", body = ErrorDto),
        (status = 404, description = "User or target not found", body = ErrorDto),
        (status = 409, description = "User or target removed while creating the favorite", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    Json(payload): Json<AddFavoriteDto>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    let favorite = favorite_service.add(payload).await?;

    Ok((StatusCode::CREATED, Json(favorite)))
}

/// Remove a character from a user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/character/{user_id}/{character_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("character_id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Favorite deleted", body = MessageDto),
        (status = 404, description = "User, character or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite_character(
    State(state): State<AppState>,
    Path((user_id, character_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    delete_favorite(&state, user_id, EntityKind::Character, character_id).await
}

/// Remove a planet from a user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/planet/{user_id}/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Favorite deleted", body = MessageDto),
        (status = 404, description = "User, planet or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite_planet(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    delete_favorite(&state, user_id, EntityKind::Planet, planet_id).await
}

/// Remove a vehicle from a user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/vehicle/{user_id}/{vehicle_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("vehicle_id" = i32, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 200, description = "Favorite deleted", body = MessageDto),
        (status = 404, description = "User, vehicle or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite_vehicle(
    State(state): State<AppState>,
    Path((user_id, vehicle_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    delete_favorite(&state, user_id, EntityKind::Vehicle, vehicle_id).await
}

async fn delete_favorite(
    state: &AppState,
    user_id: i32,
    kind: EntityKind,
    entity_id: i32,
) -> Result<(StatusCode, Json<MessageDto>), Error> {
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service.delete(user_id, kind, entity_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!("Favorite {} deleted", kind))),
    ))
}
