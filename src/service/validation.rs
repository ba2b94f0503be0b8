//! Presence checks run on request payloads before any row is built.

use crate::error::AppError;
use crate::model::{NewFavorite, NewUser, PersonPayload, PlanetPayload};

pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

impl Validate for PlanetPayload {
    fn validate(&self) -> Result<(), AppError> {
        require_text("name", &self.name)?;
        require_text("climate", &self.climate)
    }
}

impl Validate for PersonPayload {
    fn validate(&self) -> Result<(), AppError> {
        require_text("name", &self.name)?;
        require_text("age", &self.age)?;
        require_text("eye_color", &self.eye_color)
    }
}

impl Validate for NewUser {
    fn validate(&self) -> Result<(), AppError> {
        require_text("email", &self.email)
    }
}

impl Validate for NewFavorite {
    fn validate(&self) -> Result<(), AppError> {
        require_text("type", &self.kind)
    }
}
