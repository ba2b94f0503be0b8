//! HTTP handlers, one module per resource, plus the sitemap.

pub mod favorites;
pub mod people;
pub mod planets;
pub mod sitemap;
pub mod users;
