//! Create the resource tables. Idempotent: every statement is `CREATE TABLE IF NOT EXISTS`.
//! Order follows foreign-key dependencies (planet and user before people and favorite).

use crate::error::AppError;
use crate::store::Backend;
use sqlx::AnyPool;

fn table_ddl(backend: Backend) -> [(&'static str, String); 4] {
    let id = backend.id_column();
    [
        (
            "planet",
            format!(
                r#"
                CREATE TABLE IF NOT EXISTS planet (
                    {id},
                    name TEXT NOT NULL,
                    climate TEXT NOT NULL,
                    population BIGINT NOT NULL,
                    created_at TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                )
                "#
            ),
        ),
        (
            "user",
            format!(
                r#"
                CREATE TABLE IF NOT EXISTS "user" (
                    {id},
                    email TEXT NOT NULL UNIQUE,
                    password TEXT,
                    is_active BIGINT NOT NULL,
                    created_at TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                )
                "#
            ),
        ),
        (
            "people",
            format!(
                r#"
                CREATE TABLE IF NOT EXISTS people (
                    {id},
                    name TEXT NOT NULL,
                    age TEXT NOT NULL,
                    eye_color TEXT NOT NULL,
                    home_planet_id BIGINT REFERENCES planet (id),
                    created_at TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                )
                "#
            ),
        ),
        (
            "favorite",
            format!(
                r#"
                CREATE TABLE IF NOT EXISTS favorite (
                    {id},
                    "type" TEXT NOT NULL,
                    user_id BIGINT NOT NULL REFERENCES "user" (id),
                    item_id BIGINT NOT NULL,
                    created_at TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                )
                "#
            ),
        ),
    ]
}

pub async fn apply_migrations(pool: &AnyPool, backend: Backend) -> Result<(), AppError> {
    for (table, ddl) in table_ddl(backend) {
        tracing::debug!(table, sql = %ddl, "ensure table");
        sqlx::query(&ddl).execute(pool).await?;
    }
    tracing::info!(?backend, "migrations applied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ddl_uses_backend_id_column() {
        for (_, ddl) in table_ddl(Backend::Postgres) {
            assert!(ddl.contains("id BIGSERIAL PRIMARY KEY"));
        }
        for (_, ddl) in table_ddl(Backend::Sqlite) {
            assert!(ddl.contains("AUTOINCREMENT"));
        }
    }

    #[test]
    fn referenced_tables_come_first() {
        let order: Vec<_> = table_ddl(Backend::Sqlite).iter().map(|(t, _)| *t).collect();
        assert_eq!(order, ["planet", "user", "people", "favorite"]);
    }

    #[test]
    fn flags_are_stored_as_integers() {
        for backend in [Backend::Postgres, Backend::Sqlite] {
            for (_, ddl) in table_ddl(backend) {
                assert!(!ddl.contains("BOOLEAN"));
            }
        }
    }
}
