use super::{Flag, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: Option<String>,
    #[sqlx(try_from = "i64")]
    pub is_active: Flag,
    #[sqlx(try_from = "String")]
    pub created_at: Timestamp,
    #[sqlx(try_from = "String")]
    pub updated_at: Timestamp,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewUser {
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_never_serialized() {
        let now = Timestamp::now();
        let user = User {
            id: 1,
            email: "luke@rebellion.org".into(),
            password: Some("x-wing".into()),
            is_active: Flag(true),
            created_at: now,
            updated_at: now,
        };
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["email"], "luke@rebellion.org");
        assert_eq!(value["is_active"], true);
        assert!(value["created_at"].is_string());
    }
}
