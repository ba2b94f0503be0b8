//! Planet persistence.

use crate::error::AppError;
use crate::model::{Planet, PlanetPayload, Timestamp};
use sqlx::{AnyConnection, AnyPool};

const COLUMNS: &str = "id, name, climate, population, created_at, updated_at";

pub struct PlanetService;

impl PlanetService {
    pub async fn list(pool: &AnyPool) -> Result<Vec<Planet>, AppError> {
        let sql = format!("SELECT {} FROM planet ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Planet>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn read(pool: &AnyPool, id: i64) -> Result<Option<Planet>, AppError> {
        let mut conn = pool.acquire().await?;
        fetch(&mut conn, id).await
    }

    pub async fn exists(conn: &mut AnyConnection, id: i64) -> Result<bool, AppError> {
        let sql = "SELECT id FROM planet WHERE id = $1";
        tracing::debug!(sql, id, "query");
        let row: Option<i64> = sqlx::query_scalar(sql).bind(id).fetch_optional(&mut *conn).await?;
        Ok(row.is_some())
    }

    /// Insert and read back in one transaction, so a 201 always carries the committed row.
    pub async fn create(pool: &AnyPool, input: &PlanetPayload) -> Result<Planet, AppError> {
        let now = Timestamp::now().to_db();
        let sql = "INSERT INTO planet (name, climate, population, created_at, updated_at) \
                   VALUES ($1, $2, $3, $4, $5) RETURNING id";
        let mut tx = pool.begin().await?;
        tracing::debug!(sql, "query (tx)");
        let id: i64 = sqlx::query_scalar(sql)
            .bind(&input.name)
            .bind(&input.climate)
            .bind(input.population)
            .bind(&now)
            .bind(&now)
            .fetch_one(&mut *tx)
            .await?;
        let planet = fetch(&mut tx, id).await?.ok_or(AppError::Db(sqlx::Error::RowNotFound))?;
        tx.commit().await?;
        tracing::info!(id, name = %planet.name, "planet created");
        Ok(planet)
    }

    /// Replace name, climate and population. `None` when no planet has `id`.
    pub async fn update(pool: &AnyPool, id: i64, input: &PlanetPayload) -> Result<Option<Planet>, AppError> {
        let sql = "UPDATE planet SET name = $1, climate = $2, population = $3, updated_at = $4 WHERE id = $5";
        let mut tx = pool.begin().await?;
        tracing::debug!(sql, id, "query (tx)");
        let done = sqlx::query(sql)
            .bind(&input.name)
            .bind(&input.climate)
            .bind(input.population)
            .bind(Timestamp::now().to_db())
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if done.rows_affected() == 0 {
            return Ok(None);
        }
        let planet = fetch(&mut tx, id).await?;
        tx.commit().await?;
        Ok(planet)
    }

    /// Delete one planet; people born there keep their row with `home_planet_id` set to null.
    pub async fn delete(pool: &AnyPool, id: i64) -> Result<bool, AppError> {
        let orphan_sql = "UPDATE people SET home_planet_id = NULL, updated_at = $1 WHERE home_planet_id = $2";
        let delete_sql = "DELETE FROM planet WHERE id = $1";
        let mut tx = pool.begin().await?;
        tracing::debug!(sql = orphan_sql, planet_id = id, "query (tx)");
        let orphaned = sqlx::query(orphan_sql)
            .bind(Timestamp::now().to_db())
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
            tracing::info!(id, orphaned, "planet deleted");
        }
        Ok(deleted > 0)
    }
}

async fn fetch(conn: &mut AnyConnection, id: i64) -> Result<Option<Planet>, AppError> {
    let sql = format!("SELECT {} FROM planet WHERE id = $1", COLUMNS);
    tracing::debug!(sql = %sql, id, "query");
    let row = sqlx::query_as::<_, Planet>(&sql).bind(id).fetch_optional(&mut *conn).await?;
    Ok(row)
}
