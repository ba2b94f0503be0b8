//! Store connection: backend detection from the database url and pool setup.

use crate::config::Config;
use crate::error::{AppError, ConfigError};
use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;

/// Relational backends the `any` driver is built with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

impl Backend {
    pub fn from_url(url: &str) -> Result<Self, ConfigError> {
        let scheme = url.split(':').next().unwrap_or_default().to_ascii_lowercase();
        match scheme.as_str() {
            "postgres" | "postgresql" => Ok(Backend::Postgres),
            "sqlite" => Ok(Backend::Sqlite),
            _ => Err(ConfigError::UnsupportedDatabase(scheme)),
        }
    }

    /// Column definition for an auto-assigned 64-bit primary key.
    pub fn id_column(self) -> &'static str {
        match self {
            Backend::Postgres => "id BIGSERIAL PRIMARY KEY",
            Backend::Sqlite => "id INTEGER PRIMARY KEY AUTOINCREMENT",
        }
    }
}

/// Open a pool for `config.database_url`. SQLite urls keep sqlx's default of enforcing foreign keys.
pub async fn connect(config: &Config) -> Result<(AnyPool, Backend), AppError> {
    let backend = Backend::from_url(&config.database_url)?;
    sqlx::any::install_default_drivers();
    let pool = AnyPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    tracing::info!(?backend, max_connections = config.max_connections, "store connected");
    Ok((pool, backend))
}
