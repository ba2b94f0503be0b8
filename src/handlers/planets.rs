//! `/planet` handlers.

use crate::error::AppError;
use crate::extractors::{Payload, ResourceId};
use crate::model::PlanetPayload;
use crate::response::{message_ok, success_many, success_one, success_one_ok};
use crate::service::PlanetService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let planets = PlanetService::list(&state.pool).await?;
    Ok(success_many("planets", planets))
}

pub async fn read(State(state): State<AppState>, ResourceId(id): ResourceId) -> Result<impl IntoResponse, AppError> {
    let planet = PlanetService::read(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("planet {}", id)))?;
    Ok(success_one_ok(format!("planet {}", id), planet))
}

pub async fn create(
    State(state): State<AppState>,
    Payload(input): Payload<PlanetPayload>,
) -> Result<impl IntoResponse, AppError> {
    let planet = PlanetService::create(&state.pool, &input).await?;
    Ok(success_one(format!("planet {} created", planet.id), planet))
}

pub async fn update(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    Payload(input): Payload<PlanetPayload>,
) -> Result<impl IntoResponse, AppError> {
    let planet = PlanetService::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("planet {}", id)))?;
    Ok(success_one_ok(format!("planet {} updated", id), planet))
}

pub async fn delete(State(state): State<AppState>, ResourceId(id): ResourceId) -> Result<impl IntoResponse, AppError> {
    if !PlanetService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(format!("planet {}", id)));
    }
    Ok(message_ok(format!("planet {} deleted", id)))
}
