//! `GET /`: service name and version, then every registered path and the methods it accepts.

use axum::Json;
use serde::Serialize;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub path: String,
    pub methods: Vec<String>,
}

#[derive(Serialize)]
pub struct SitemapBody {
    pub msg: &'static str,
    pub name: &'static str,
    pub version: &'static str,
    pub endpoints: Vec<Endpoint>,
}

pub async fn sitemap(endpoints: Arc<[Endpoint]>) -> Json<SitemapBody> {
    Json(SitemapBody {
        msg: "available endpoints",
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        endpoints: endpoints.to_vec(),
    })
}
