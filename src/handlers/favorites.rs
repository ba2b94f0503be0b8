//! `/favorites` (list) and `/favorite` (create, delete) handlers.

use crate::error::AppError;
use crate::extractors::{Payload, ResourceId};
use crate::model::NewFavorite;
use crate::response::{message_ok, success_many, success_one};
use crate::service::FavoriteService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let favorites = FavoriteService::list(&state.pool).await?;
    Ok(success_many("favorites", favorites))
}

pub async fn create(
    State(state): State<AppState>,
    Payload(input): Payload<NewFavorite>,
) -> Result<impl IntoResponse, AppError> {
    let favorite = FavoriteService::create(&state.pool, &input).await?;
    Ok(success_one(format!("favorite {} created", favorite.id), favorite))
}

pub async fn delete(State(state): State<AppState>, ResourceId(id): ResourceId) -> Result<impl IntoResponse, AppError> {
    if !FavoriteService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(format!("favorite {}", id)));
    }
    Ok(message_ok(format!("favorite {} deleted", id)))
}
