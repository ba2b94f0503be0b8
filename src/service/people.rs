//! People persistence. A person's home planet, when given, must already exist.

use crate::error::AppError;
use crate::model::{People, PersonPayload, Timestamp};
use crate::service::PlanetService;
use sqlx::{AnyConnection, AnyPool};

const COLUMNS: &str = "id, name, age, eye_color, home_planet_id, created_at, updated_at";

pub struct PeopleService;

impl PeopleService {
    pub async fn list(pool: &AnyPool) -> Result<Vec<People>, AppError> {
        let sql = format!("SELECT {} FROM people ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, People>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn read(pool: &AnyPool, id: i64) -> Result<Option<People>, AppError> {
        let mut conn = pool.acquire().await?;
        fetch(&mut conn, id).await
    }

    pub async fn create(pool: &AnyPool, input: &PersonPayload) -> Result<People, AppError> {
        let now = Timestamp::now().to_db();
        let sql = "INSERT INTO people (name, age, eye_color, home_planet_id, created_at, updated_at) \
                   VALUES ($1, $2, $3, $4, $5, $6) RETURNING id";
        let mut tx = pool.begin().await?;
        ensure_home_planet(&mut tx, input.home_planet_id).await?;
        tracing::debug!(sql, "query (tx)");
        let id: i64 = sqlx::query_scalar(sql)
            .bind(&input.name)
            .bind(&input.age)
            .bind(&input.eye_color)
            .bind(input.home_planet_id)
            .bind(&now)
            .bind(&now)
            .fetch_one(&mut *tx)
            .await?;
        let person = fetch(&mut tx, id).await?.ok_or(AppError::Db(sqlx::Error::RowNotFound))?;
        tx.commit().await?;
        tracing::info!(id, name = %person.name, "person created");
        Ok(person)
    }

    /// Replace every mutable field, including `home_planet_id`. `None` when no person has `id`.
    pub async fn update(pool: &AnyPool, id: i64, input: &PersonPayload) -> Result<Option<People>, AppError> {
        let sql = "UPDATE people SET name = $1, age = $2, eye_color = $3, home_planet_id = $4, updated_at = $5 \
                   WHERE id = $6";
        let mut tx = pool.begin().await?;
        ensure_home_planet(&mut tx, input.home_planet_id).await?;
        tracing::debug!(sql, id, "query (tx)");
        let done = sqlx::query(sql)
            .bind(&input.name)
            .bind(&input.age)
            .bind(&input.eye_color)
            .bind(input.home_planet_id)
            .bind(Timestamp::now().to_db())
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if done.rows_affected() == 0 {
            return Ok(None);
        }
        let person = fetch(&mut tx, id).await?;
        tx.commit().await?;
        Ok(person)
    }

    pub async fn delete(pool: &AnyPool, id: i64) -> Result<bool, AppError> {
        let sql = "DELETE FROM people WHERE id = $1";
        tracing::debug!(sql, id, "query");
        let deleted = sqlx::query(sql).bind(id).execute(pool).await?.rows_affected();
        if deleted > 0 {
            tracing::info!(id, "person deleted");
        }
        Ok(deleted > 0)
    }
}

async fn fetch(conn: &mut AnyConnection, id: i64) -> Result<Option<People>, AppError> {
    let sql = format!("SELECT {} FROM people WHERE id = $1", COLUMNS);
    tracing::debug!(sql = %sql, id, "query");
    let row = sqlx::query_as::<_, People>(&sql).bind(id).fetch_optional(&mut *conn).await?;
    Ok(row)
}

async fn ensure_home_planet(conn: &mut AnyConnection, home_planet_id: Option<i64>) -> Result<(), AppError> {
    if let Some(planet_id) = home_planet_id {
        if !PlanetService::exists(conn, planet_id).await? {
            return Err(AppError::Validation(format!(
                "home_planet_id {} does not reference an existing planet",
                planet_id
            )));
        }
    }
    Ok(())
}
