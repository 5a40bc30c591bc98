//! Shortcut imports for the entity types.

pub use super::developers::Entity as Developers;
pub use super::genres::Entity as Genres;
pub use super::reviews::Entity as Reviews;
pub use super::user_games::Entity as UserGames;
pub use super::users::Entity as Users;
pub use super::videogames::Entity as Videogames;
