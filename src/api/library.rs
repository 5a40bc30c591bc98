//! Library endpoints linking users to the games they own.
//!
//! Removing a game from a library also deletes that user's review of it.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    database::repository::{
        library_repository::LibraryRepository, users_repository::UsersRepository,
        videogames_repository::VideogamesRepository,
    },
    entity::{user_games, videogames},
    error::AppError,
    state::AppState,
};

async fn check_link_targets(
    state: &AppState,
    user_id: i32,
    videogame_id: i32,
) -> Result<(), AppError> {
    if !UsersRepository::exists(&state.db, user_id).await? {
        return Err(AppError::not_found("user", user_id));
    }
    if !VideogamesRepository::exists(&state.db, videogame_id).await? {
        return Err(AppError::not_found("videogame", videogame_id));
    }
    Ok(())
}

pub async fn list_user_games(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<videogames::Model>>, AppError> {
    if !UsersRepository::exists(&state.db, user_id).await? {
        return Err(AppError::not_found("user", user_id));
    }
    let games = LibraryRepository::find_games_of_user(&state.db, user_id).await?;
    Ok(Json(games))
}

pub async fn add_user_game(
    State(state): State<AppState>,
    Path((user_id, videogame_id)): Path<(i32, i32)>,
) -> Result<(StatusCode, Json<user_games::Model>), AppError> {
    check_link_targets(&state, user_id, videogame_id).await?;
    if LibraryRepository::owns_game(&state.db, user_id, videogame_id).await? {
        return Err(AppError::Conflict(format!(
            "user {user_id} already owns videogame {videogame_id}"
        )));
    }
    let link = LibraryRepository::add_game(&state.db, user_id, videogame_id).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

pub async fn remove_user_game(
    State(state): State<AppState>,
    Path((user_id, videogame_id)): Path<(i32, i32)>,
) -> Result<StatusCode, AppError> {
    check_link_targets(&state, user_id, videogame_id).await?;
    if !LibraryRepository::owns_game(&state.db, user_id, videogame_id).await? {
        return Err(AppError::Conflict(format!(
            "user {user_id} does not own videogame {videogame_id}"
        )));
    }
    LibraryRepository::remove_game(&state.db, user_id, videogame_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
