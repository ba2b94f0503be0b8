//! Resource routes. Item paths take an integer `:id`.

use crate::handlers::{favorites, people, planets, users};
use crate::routes::RouteTable;
use crate::state::AppState;

pub fn resource_routes(table: RouteTable<AppState>) -> RouteTable<AppState> {
    table
        .get("/people", people::list)
        .post("/people", people::create)
        .get("/people/:id", people::read)
        .put("/people/:id", people::update)
        .delete("/people/:id", people::delete)
        .get("/planet", planets::list)
        .post("/planet", planets::create)
        .get("/planet/:id", planets::read)
        .put("/planet/:id", planets::update)
        .delete("/planet/:id", planets::delete)
        .get("/users", users::list)
        .post("/users", users::create)
        .get("/users/:id", users::read)
        .delete("/users/:id", users::delete)
        .get("/users/:id/favorites", users::favorites)
        .get("/favorites", favorites::list)
        .post("/favorite", favorites::create)
        .delete("/favorite/:id", favorites::delete)
}
