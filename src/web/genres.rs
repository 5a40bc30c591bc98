//! Genre browsing and form CRUD.

use axum::{
    Json,
    extract::{Form, Path, State},
    response::Redirect,
};
use serde::{Deserialize, Serialize};

use crate::{
    database::{
        dto::CreateGenreData,
        repository::{
            genres_repository::GenresRepository, videogames_repository::VideogamesRepository,
        },
    },
    entity::{genres, videogames},
    error::AppError,
    state::AppState,
};

/// A genre together with the games filed under it.
#[derive(Serialize)]
pub struct GenreDetail {
    pub genre: genres::Model,
    pub videogames: Vec<videogames::Model>,
}

#[derive(Deserialize)]
pub struct GenreForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
}

impl GenreForm {
    fn into_data(self) -> Result<CreateGenreData, Vec<String>> {
        CreateGenreData {
            name: self.name,
            description: self.description,
            image_url: Some(self.image_url),
        }
        .validate()
    }
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<genres::Model>>, AppError> {
    let genres = GenresRepository::find_all(&state.db).await?;
    Ok(Json(genres))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(genre_id): Path<i32>,
) -> Result<Json<GenreDetail>, AppError> {
    let genre = GenresRepository::find_by_id(&state.db, genre_id)
        .await?
        .ok_or_else(|| AppError::not_found("genre", genre_id))?;
    let videogames = VideogamesRepository::find_by_genre(&state.db, genre_id).await?;
    Ok(Json(GenreDetail { genre, videogames }))
}

pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<GenreForm>,
) -> Result<Redirect, AppError> {
    let data = form.into_data().map_err(AppError::Validation)?;
    let genre = GenresRepository::insert(&state.db, data).await?;
    Ok(Redirect::to(&format!("/genres/{}", genre.id)))
}

pub async fn edit(
    State(state): State<AppState>,
    Path(genre_id): Path<i32>,
    Form(form): Form<GenreForm>,
) -> Result<Redirect, AppError> {
    if !GenresRepository::exists(&state.db, genre_id).await? {
        return Err(AppError::not_found("genre", genre_id));
    }
    let data = form.into_data().map_err(AppError::Validation)?;
    GenresRepository::update_full(&state.db, genre_id, data)
        .await?
        .ok_or_else(|| AppError::not_found("genre", genre_id))?;
    Ok(Redirect::to(&format!("/genres/{genre_id}")))
}
