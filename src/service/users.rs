//! User persistence. Emails are unique; deleting a user takes their favorites with it.

use crate::error::AppError;
use crate::model::{Flag, NewUser, Timestamp, User};
use sqlx::{AnyConnection, AnyPool};

const COLUMNS: &str = "id, email, password, is_active, created_at, updated_at";

pub struct UserService;

impl UserService {
    pub async fn list(pool: &AnyPool) -> Result<Vec<User>, AppError> {
        let sql = format!(r#"SELECT {} FROM "user" ORDER BY id"#, COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, User>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn read(pool: &AnyPool, id: i64) -> Result<Option<User>, AppError> {
        let mut conn = pool.acquire().await?;
        fetch(&mut conn, id).await
    }

    pub async fn exists(conn: &mut AnyConnection, id: i64) -> Result<bool, AppError> {
        let sql = r#"SELECT id FROM "user" WHERE id = $1"#;
        tracing::debug!(sql, id, "query");
        let row: Option<i64> = sqlx::query_scalar(sql).bind(id).fetch_optional(&mut *conn).await?;
        Ok(row.is_some())
    }

    pub async fn create(pool: &AnyPool, input: &NewUser) -> Result<User, AppError> {
        let now = Timestamp::now().to_db();
        let sql = r#"INSERT INTO "user" (email, password, is_active, created_at, updated_at)
                     VALUES ($1, $2, $3, $4, $5) RETURNING id"#;
        let mut tx = pool.begin().await?;
        tracing::debug!(sql, "query (tx)");
        let inserted = sqlx::query_scalar::<_, i64>(sql)
            .bind(&input.email)
            .bind(input.password.as_deref())
            .bind(Flag::from(input.is_active).to_db())
            .bind(&now)
            .bind(&now)
            .fetch_one(&mut *tx)
            .await;
        let id = match inserted {
            Ok(id) => id,
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                return Err(AppError::Conflict(format!("email '{}' is already registered", input.email)));
            }
            Err(e) => return Err(e.into()),
        };
        let user = fetch(&mut tx, id).await?.ok_or(AppError::Db(sqlx::Error::RowNotFound))?;
        tx.commit().await?;
        tracing::info!(id, "user created");
        Ok(user)
    }

    /// Delete one user and every favorite they own, in one transaction.
    pub async fn delete(pool: &AnyPool, id: i64) -> Result<bool, AppError> {
        let favorites_sql = "DELETE FROM favorite WHERE user_id = $1";
        let delete_sql = r#"DELETE FROM "user" WHERE id = $1"#;
        let mut tx = pool.begin().await?;
        tracing::debug!(sql = favorites_sql, user_id = id, "query (tx)");
        let favorites = sqlx::query(favorites_sql)
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        tracing::debug!(sql = delete_sql, id, "query (tx)");
        let deleted = sqlx::query(delete_sql)
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        tx.commit().await?;
        if deleted > 0 {
            tracing::info!(id, favorites, "user deleted");
        }
        Ok(deleted > 0)
    }
}

async fn fetch(conn: &mut AnyConnection, id: i64) -> Result<Option<User>, AppError> {
    let sql = format!(r#"SELECT {} FROM "user" WHERE id = $1"#, COLUMNS);
    tracing::debug!(sql = %sql, id, "query");
    let row = sqlx::query_as::<_, User>(&sql).bind(id).fetch_optional(&mut *conn).await?;
    Ok(row)
}
