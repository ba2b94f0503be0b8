//! `/people` handlers.

use crate::error::AppError;
use crate::extractors::{Payload, ResourceId};
use crate::model::PersonPayload;
use crate::response::{message_ok, success_many, success_one, success_one_ok};
use crate::service::PeopleService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let people = PeopleService::list(&state.pool).await?;
    Ok(success_many("people", people))
}

pub async fn read(State(state): State<AppState>, ResourceId(id): ResourceId) -> Result<impl IntoResponse, AppError> {
    let person = PeopleService::read(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("person {}", id)))?;
    Ok(success_one_ok(format!("person {}", id), person))
}

pub async fn create(
    State(state): State<AppState>,
    Payload(input): Payload<PersonPayload>,
) -> Result<impl IntoResponse, AppError> {
    let person = PeopleService::create(&state.pool, &input).await?;
    Ok(success_one(format!("person {} created", person.id), person))
}

pub async fn update(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    Payload(input): Payload<PersonPayload>,
) -> Result<impl IntoResponse, AppError> {
    let person = PeopleService::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("person {}", id)))?;
    Ok(success_one_ok(format!("person {} updated", id), person))
}

pub async fn delete(State(state): State<AppState>, ResourceId(id): ResourceId) -> Result<impl IntoResponse, AppError> {
    if !PeopleService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(format!("person {}", id)));
    }
    Ok(message_ok(format!("person {} deleted", id)))
}
