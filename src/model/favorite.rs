use super::Timestamp;
use serde::{Deserialize, Serialize};

/// A user's bookmark of an item. `item_id` points into whatever table `kind` names and is not checked.
#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct Favorite {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub user_id: i64,
    pub item_id: i64,
    #[sqlx(try_from = "String")]
    pub created_at: Timestamp,
    #[sqlx(try_from = "String")]
    pub updated_at: Timestamp,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewFavorite {
    #[serde(rename = "type")]
    pub kind: String,
    pub user_id: i64,
    pub item_id: i64,
}
