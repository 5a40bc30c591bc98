//! Browser-driven surface: form posts, 303 redirects, JSON view models.
//!
//! There is no login session; the flows act as the seeded player1 account.

pub mod developers;
pub mod genres;
pub mod reviews;
pub mod users;
pub mod videogames;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// The seeded player1 account the browser flows act as.
pub const LIBRARY_USER_ID: i32 = 2;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/videogame", get(videogames::catalog))
        .route("/videogame/library", get(videogames::library))
        .route("/videogame/new", post(videogames::create))
        .route("/videogame/{game_id}", get(videogames::detail))
        .route("/videogame/{game_id}/edit", post(videogames::edit))
        .route(
            "/videogame/{game_id}/download",
            post(videogames::toggle_download),
        )
        .route("/videogame/{game_id}/review", post(reviews::create))
        .route("/videogame/{game_id}/review/edit", post(reviews::edit))
        .route("/videogame/{game_id}/review/delete", post(reviews::delete))
        .route("/genres", get(genres::list))
        .route("/genres/new", post(genres::create))
        .route("/genres/{genre_id}", get(genres::detail))
        .route("/genres/{genre_id}/edit", post(genres::edit))
        .route("/developers", get(developers::list))
        .route("/developers/new", post(developers::create))
        .route("/developers/{developer_id}", get(developers::detail))
        .route("/developers/{developer_id}/edit", post(developers::edit))
        .route("/developers/{developer_id}/delete", post(developers::delete))
        .route("/users", get(users::list))
        .route("/users/{user_id}", get(users::detail))
}

/// Parses an optional form id. Blank means absent; anything else must be a
/// non-negative integer.
fn parse_optional_id(raw: &str, field: &str, errors: &mut Vec<String>) -> Option<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<i32>() {
        Ok(id) if id >= 0 => Some(id),
        Ok(_) => {
            errors.push(format!("{field} must not be negative"));
            None
        }
        Err(_) => {
            errors.push(format!("{field} must be a valid number"));
            None
        }
    }
}
