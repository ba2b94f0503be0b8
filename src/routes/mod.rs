//! Router assembly: route table, sitemap, and the tower-http layer stack.

pub mod health;
pub mod limit;
pub mod resources;
pub mod table;

pub use health::health_routes;
pub use limit::BODY_LIMIT;
pub use resources::resource_routes;
pub use table::RouteTable;

use crate::handlers::sitemap::{sitemap, Endpoint};
use crate::state::AppState;
use axum::{middleware, Router};
use std::sync::Arc;
use tower::Layer;
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};

/// Full application: every route plus `GET /` listing them. Trailing slashes are ignored.
pub fn app(state: AppState) -> NormalizePath<Router> {
    let table = resource_routes(health_routes(RouteTable::new()));

    let mut endpoints = vec![Endpoint {
        path: "/".into(),
        methods: vec!["GET".into()],
    }];
    endpoints.extend(table.endpoints());
    let endpoints: Arc<[Endpoint]> = endpoints.into();
    let table = table.get("/", move || sitemap(endpoints.clone()));

    let router = table
        .into_router()
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT))
        .layer(middleware::from_fn(limit::oversized_body_envelope))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());
    NormalizePathLayer::trim_trailing_slash().layer(router)
}
