//! Genre endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    database::{
        dto::{CreateGenreData, UpdateGenreData},
        repository::genres_repository::GenresRepository,
    },
    entity::genres,
    error::AppError,
    state::AppState,
};

pub async fn list_genres(
    State(state): State<AppState>,
) -> Result<Json<Vec<genres::Model>>, AppError> {
    let genres = GenresRepository::find_all(&state.db).await?;
    Ok(Json(genres))
}

pub async fn get_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<genres::Model>, AppError> {
    let genre = GenresRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("genre", id))?;
    Ok(Json(genre))
}

pub async fn create_genre(
    State(state): State<AppState>,
    Json(payload): Json<CreateGenreData>,
) -> Result<(StatusCode, Json<genres::Model>), AppError> {
    let data = payload.validate().map_err(AppError::Validation)?;
    let genre = GenresRepository::insert(&state.db, data).await?;
    Ok((StatusCode::CREATED, Json(genre)))
}

pub async fn update_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CreateGenreData>,
) -> Result<Json<genres::Model>, AppError> {
    let data = payload.validate().map_err(AppError::Validation)?;
    let genre = GenresRepository::update_full(&state.db, id, data)
        .await?
        .ok_or_else(|| AppError::not_found("genre", id))?;
    Ok(Json(genre))
}

pub async fn patch_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateGenreData>,
) -> Result<Json<genres::Model>, AppError> {
    let updates = payload.validate().map_err(AppError::Validation)?;
    let genre = GenresRepository::update_partial(&state.db, id, updates)
        .await?
        .ok_or_else(|| AppError::not_found("genre", id))?;
    Ok(Json(genre))
}

pub async fn delete_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let result = GenresRepository::delete(&state.db, id).await?;
    if result.rows_affected == 0 {
        return Err(AppError::not_found("genre", id));
    }
    Ok(StatusCode::NO_CONTENT)
}
