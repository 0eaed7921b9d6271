use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::{ErrorDto, ItemDto, ListDto, MessageDto},
        user::UserDto,
    },
    server::{
        controller::extract::{Json, Path},
        error::{not_found::NotFoundError, Error},
        model::app::AppState,
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

/// List every user
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when retrieving users", body = ListDto<UserDto>),
        (status = 404, description = "No users exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let users = user_service.get_all().await?;

    if users.is_empty() {
        return Err(NotFoundError::Users.into());
    }

    Ok((StatusCode::OK, Json(ListDto::ok(users))))
}

/// Get a single user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Success when retrieving user", body = ItemDto<UserDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let Some(user) = user_service.get_user(user_id).await? else {
        return Err(NotFoundError::User(user_id).into());
    };

    Ok((StatusCode::OK, Json(ItemDto::ok(user))))
}

/// Delete a user along with their favorites
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    if !user_service.delete_user(user_id).await? {
        return Err(NotFoundError::User(user_id).into());
    }

    Ok((StatusCode::OK, Json(MessageDto::new("User deleted"))))
}
