use axum::{extract::State, http::StatusCode, Json};
use service::users::{CreateUserInput, UpdateUserInput, User};

use super::ServerState;
use crate::errors::ApiError;
use crate::extract::{OptionalJson, UserId};

pub async fn list_users(State(state): State<ServerState>) -> Json<Vec<User>> {
    Json(state.users.list().await)
}

pub async fn get_user(
    State(state): State<ServerState>,
    UserId(id): UserId,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.users.get(id).await?))
}

pub async fn create_user(
    State(state): State<ServerState>,
    OptionalJson(input): OptionalJson<CreateUserInput>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = state.users.create(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn update_user(
    State(state): State<ServerState>,
    UserId(id): UserId,
    OptionalJson(input): OptionalJson<UpdateUserInput>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.users.update(id, input).await?))
}

pub async fn delete_user(
    State(state): State<ServerState>,
    UserId(id): UserId,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.users.delete(id).await?))
}
