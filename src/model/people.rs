use super::Timestamp;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct People {
    pub id: i64,
    pub name: String,
    pub age: String,
    pub eye_color: String,
    pub home_planet_id: Option<i64>,
    #[sqlx(try_from = "String")]
    pub created_at: Timestamp,
    #[sqlx(try_from = "String")]
    pub updated_at: Timestamp,
}

/// Body of `POST /people` and `PUT /people/{id}`. An absent `home_planet_id` stores null.
#[derive(Clone, Debug, Deserialize)]
pub struct PersonPayload {
    pub name: String,
    pub age: String,
    pub eye_color: String,
    #[serde(default)]
    pub home_planet_id: Option<i64>,
}
