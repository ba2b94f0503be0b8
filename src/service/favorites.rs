//! Favorite persistence. Only `user_id` is checked; `item_id` is taken as given.

use crate::error::AppError;
use crate::model::{Favorite, NewFavorite, Timestamp};
use crate::service::UserService;
use sqlx::{AnyConnection, AnyPool};

const COLUMNS: &str = r#"id, "type", user_id, item_id, created_at, updated_at"#;

pub struct FavoriteService;

impl FavoriteService {
    pub async fn list(pool: &AnyPool) -> Result<Vec<Favorite>, AppError> {
        let sql = format!("SELECT {} FROM favorite ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Favorite>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn list_for_user(pool: &AnyPool, user_id: i64) -> Result<Vec<Favorite>, AppError> {
        let sql = format!("SELECT {} FROM favorite WHERE user_id = $1 ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, user_id, "query");
        let rows = sqlx::query_as::<_, Favorite>(&sql).bind(user_id).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn read(pool: &AnyPool, id: i64) -> Result<Option<Favorite>, AppError> {
        let mut conn = pool.acquire().await?;
        fetch(&mut conn, id).await
    }

    /// The owner check, insert and read-back share one transaction.
    pub async fn create(pool: &AnyPool, input: &NewFavorite) -> Result<Favorite, AppError> {
        let mut tx = pool.begin().await?;
        if !UserService::exists(&mut tx, input.user_id).await? {
            return Err(AppError::Validation(format!(
                "user_id {} does not reference an existing user",
                input.user_id
            )));
        }
        let now = Timestamp::now().to_db();
        let sql = r#"INSERT INTO favorite ("type", user_id, item_id, created_at, updated_at)
                     VALUES ($1, $2, $3, $4, $5) RETURNING id"#;
        tracing::debug!(sql, "query (tx)");
        let id: i64 = sqlx::query_scalar(sql)
            .bind(&input.kind)
            .bind(input.user_id)
            .bind(input.item_id)
            .bind(&now)
            .bind(&now)
            .fetch_one(&mut *tx)
            .await?;
        let favorite = fetch(&mut tx, id).await?.ok_or(AppError::Db(sqlx::Error::RowNotFound))?;
        tx.commit().await?;
        tracing::info!(id, user_id = input.user_id, kind = %input.kind, "favorite created");
        Ok(favorite)
    }

    pub async fn delete(pool: &AnyPool, id: i64) -> Result<bool, AppError> {
        let sql = "DELETE FROM favorite WHERE id = $1";
        tracing::debug!(sql, id, "query");
        let deleted = sqlx::query(sql).bind(id).execute(pool).await?.rows_affected();
        Ok(deleted > 0)
    }
}

async fn fetch(conn: &mut AnyConnection, id: i64) -> Result<Option<Favorite>, AppError> {
    let sql = format!("SELECT {} FROM favorite WHERE id = $1", COLUMNS);
    tracing::debug!(sql = %sql, id, "query");
    let row = sqlx::query_as::<_, Favorite>(&sql).bind(id).fetch_optional(&mut *conn).await?;
    Ok(row)
}
