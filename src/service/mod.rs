//! Per-resource persistence services and request validation.

pub mod favorites;
pub mod people;
pub mod planets;
pub mod users;
pub mod validation;

pub use favorites::FavoriteService;
pub use people::PeopleService;
pub use planets::PlanetService;
pub use users::UserService;
pub use validation::Validate;
