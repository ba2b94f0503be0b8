//! Persisted resources and the typed request payloads that create or replace them.
//!
//! The `Serialize` impl of each row type is its transport form: every column by name,
//! timestamps as RFC 3339 strings, and never a user's password.

mod favorite;
mod flag;
mod people;
mod planet;
mod timestamp;
mod user;

pub use favorite::{Favorite, NewFavorite};
pub use flag::Flag;
pub use people::{People, PersonPayload};
pub use planet::{Planet, PlanetPayload};
pub use timestamp::Timestamp;
pub use user::{NewUser, User};
