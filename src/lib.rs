//! Star Wars resources REST backend: people, planets, users and their favorites.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod logging;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{AppError, ConfigError};
pub use logging::init_tracing;
pub use migration::apply_migrations;
pub use routes::app;
pub use state::AppState;
pub use store::{connect, Backend};
