//! Videogame browsing, form CRUD, and the library download toggle.

use axum::{
    Json,
    extract::{Form, Path, State},
    response::Redirect,
};
use serde::{Deserialize, Serialize};

use crate::{
    api::videogames::check_references,
    database::{
        dto::CreateVideogameData,
        repository::{
            genres_repository::GenresRepository, library_repository::LibraryRepository,
            reviews_repository::ReviewsRepository, users_repository::UsersRepository,
            videogames_repository::VideogamesRepository,
        },
    },
    entity::{genres, reviews, videogames},
    error::AppError,
    state::AppState,
    web::{LIBRARY_USER_ID, parse_optional_id},
};

#[derive(Serialize)]
pub struct CatalogView {
    pub videogames: Vec<videogames::Model>,
    pub last_games: Vec<videogames::Model>,
}

#[derive(Serialize)]
pub struct VideogameDetail {
    pub videogame: videogames::Model,
    pub genre: Option<genres::Model>,
    pub owned: bool,
    pub review: Option<reviews::Model>,
}

/// Videogame form fields arrive as strings; blanks mean absent.
#[derive(Deserialize)]
pub struct VideogameForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cover_url: String,
    #[serde(default)]
    pub genre_id: String,
    #[serde(default)]
    pub developer_id: String,
}

impl VideogameForm {
    fn into_data(self) -> Result<CreateVideogameData, Vec<String>> {
        let mut errors = Vec::new();
        let genre_id = parse_optional_id(&self.genre_id, "genre id", &mut errors);
        let developer_id = parse_optional_id(&self.developer_id, "developer id", &mut errors);

        let data = CreateVideogameData {
            title: self.title,
            description: Some(self.description),
            cover_url: Some(self.cover_url),
            genre_id,
            developer_id,
        };
        match data.validate() {
            Ok(data) if errors.is_empty() => Ok(data),
            Ok(_) => Err(errors),
            Err(mut more) => {
                errors.append(&mut more);
                Err(errors)
            }
        }
    }
}

pub async fn catalog(State(state): State<AppState>) -> Result<Json<CatalogView>, AppError> {
    let videogames = VideogamesRepository::find_all(&state.db).await?;
    let last_games = VideogamesRepository::find_latest(&state.db, 3).await?;
    Ok(Json(CatalogView {
        videogames,
        last_games,
    }))
}

pub async fn library(
    State(state): State<AppState>,
) -> Result<Json<Vec<videogames::Model>>, AppError> {
    if !UsersRepository::exists(&state.db, LIBRARY_USER_ID).await? {
        return Err(AppError::not_found("user", LIBRARY_USER_ID));
    }
    let games = LibraryRepository::find_games_of_user(&state.db, LIBRARY_USER_ID).await?;
    Ok(Json(games))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(game_id): Path<i32>,
) -> Result<Json<VideogameDetail>, AppError> {
    let videogame = VideogamesRepository::find_by_id(&state.db, game_id)
        .await?
        .ok_or_else(|| AppError::not_found("videogame", game_id))?;
    let genre = match videogame.genre_id {
        Some(genre_id) => GenresRepository::find_by_id(&state.db, genre_id).await?,
        None => None,
    };
    let owned = LibraryRepository::owns_game(&state.db, LIBRARY_USER_ID, game_id).await?;
    let review =
        ReviewsRepository::find_by_user_and_game(&state.db, LIBRARY_USER_ID, game_id).await?;
    Ok(Json(VideogameDetail {
        videogame,
        genre,
        owned,
        review,
    }))
}

pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<VideogameForm>,
) -> Result<Redirect, AppError> {
    let data = form.into_data().map_err(AppError::Validation)?;
    check_references(&state.db, data.genre_id, data.developer_id).await?;
    let videogame = VideogamesRepository::insert(&state.db, data).await?;
    Ok(Redirect::to(&format!("/videogame/{}", videogame.id)))
}

pub async fn edit(
    State(state): State<AppState>,
    Path(game_id): Path<i32>,
    Form(form): Form<VideogameForm>,
) -> Result<Redirect, AppError> {
    if !VideogamesRepository::exists(&state.db, game_id).await? {
        return Err(AppError::not_found("videogame", game_id));
    }
    let data = form.into_data().map_err(AppError::Validation)?;
    check_references(&state.db, data.genre_id, data.developer_id).await?;
    VideogamesRepository::update_full(&state.db, game_id, data)
        .await?
        .ok_or_else(|| AppError::not_found("videogame", game_id))?;
    Ok(Redirect::to(&format!("/videogame/{game_id}")))
}

/// Adds the game to the player's library, or removes it when already owned.
/// The removal also drops the player's review of the game.
pub async fn toggle_download(
    State(state): State<AppState>,
    Path(game_id): Path<i32>,
) -> Result<Redirect, AppError> {
    if !UsersRepository::exists(&state.db, LIBRARY_USER_ID).await? {
        return Err(AppError::not_found("user", LIBRARY_USER_ID));
    }
    if !VideogamesRepository::exists(&state.db, game_id).await? {
        return Err(AppError::not_found("videogame", game_id));
    }

    if LibraryRepository::owns_game(&state.db, LIBRARY_USER_ID, game_id).await? {
        LibraryRepository::remove_game(&state.db, LIBRARY_USER_ID, game_id).await?;
    } else {
        LibraryRepository::add_game(&state.db, LIBRARY_USER_ID, game_id).await?;
    }
    Ok(Redirect::to(&format!("/videogame/{game_id}")))
}
