//! JSON API surface.

pub mod developers;
pub mod genres;
pub mod library;
pub mod reviews;
pub mod users;
pub mod videogames;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/genres",
            get(genres::list_genres).post(genres::create_genre),
        )
        .route(
            "/api/genres/{id}",
            get(genres::get_genre)
                .put(genres::update_genre)
                .patch(genres::patch_genre)
                .delete(genres::delete_genre),
        )
        .route(
            "/api/developers",
            get(developers::list_developers).post(developers::create_developer),
        )
        .route(
            "/api/developers/{id}",
            get(developers::get_developer)
                .put(developers::update_developer)
                .patch(developers::patch_developer)
                .delete(developers::delete_developer),
        )
        .route(
            "/api/videogames",
            get(videogames::list_videogames).post(videogames::create_videogame),
        )
        .route(
            "/api/videogames/{id}",
            get(videogames::get_videogame)
                .put(videogames::update_videogame)
                .patch(videogames::patch_videogame)
                .delete(videogames::delete_videogame),
        )
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route(
            "/api/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .patch(users::patch_user)
                .delete(users::delete_user),
        )
        .route(
            "/api/reviews",
            get(reviews::list_reviews).post(reviews::create_review),
        )
        .route(
            "/api/reviews/{id}",
            get(reviews::get_review)
                .put(reviews::update_review)
                .patch(reviews::patch_review)
                .delete(reviews::delete_review),
        )
        .route("/api/users/{user_id}/games", get(library::list_user_games))
        .route(
            "/api/users/{user_id}/games/{videogame_id}",
            post(library::add_user_game).delete(library::remove_user_game),
        )
}
