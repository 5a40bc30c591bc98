pub mod developers_repository;
pub mod genres_repository;
pub mod library_repository;
pub mod reviews_repository;
pub mod users_repository;
pub mod videogames_repository;
