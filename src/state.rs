//! Shared application state for all routes.

use sqlx::AnyPool;

/// Handed to every handler; the pool hands out one connection per statement or transaction.
#[derive(Clone)]
pub struct AppState {
    pub pool: AnyPool,
}

impl AppState {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}
