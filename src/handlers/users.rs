//! `/users` handlers. Responses never include passwords.

use crate::error::AppError;
use crate::extractors::{Payload, ResourceId};
use crate::model::NewUser;
use crate::response::{message_ok, success_many, success_one, success_one_ok};
use crate::service::{FavoriteService, UserService};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::list(&state.pool).await?;
    Ok(success_many("users", users))
}

pub async fn read(State(state): State<AppState>, ResourceId(id): ResourceId) -> Result<impl IntoResponse, AppError> {
    let user = UserService::read(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {}", id)))?;
    Ok(success_one_ok(format!("user {}", id), user))
}

pub async fn create(
    State(state): State<AppState>,
    Payload(input): Payload<NewUser>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::create(&state.pool, &input).await?;
    Ok(success_one(format!("user {} created", user.id), user))
}

pub async fn delete(State(state): State<AppState>, ResourceId(id): ResourceId) -> Result<impl IntoResponse, AppError> {
    if !UserService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(format!("user {}", id)));
    }
    Ok(message_ok(format!("user {} deleted", id)))
}

/// GET /users/:id/favorites
pub async fn favorites(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<impl IntoResponse, AppError> {
    if UserService::read(&state.pool, id).await?.is_none() {
        return Err(AppError::NotFound(format!("user {}", id)));
    }
    let favorites = FavoriteService::list_for_user(&state.pool, id).await?;
    Ok(success_many(format!("favorites of user {}", id), favorites))
}
