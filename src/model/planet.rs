use super::Timestamp;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub climate: String,
    pub population: i64,
    #[sqlx(try_from = "String")]
    pub created_at: Timestamp,
    #[sqlx(try_from = "String")]
    pub updated_at: Timestamp,
}

/// Body of `POST /planet` and `PUT /planet/{id}`; PUT replaces all three fields.
#[derive(Clone, Debug, Deserialize)]
pub struct PlanetPayload {
    pub name: String,
    pub climate: String,
    pub population: i64,
}
