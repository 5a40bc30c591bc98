//! Data entity module.
//!
//! SeaORM entity definitions for every table in the catalog schema.

pub mod prelude;

pub mod developers;
pub mod genres;
pub mod reviews;
pub mod user_games;
pub mod users;
pub mod videogames;
