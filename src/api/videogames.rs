//! Videogame endpoints.
//!
//! Creates and updates refuse genre or developer ids that do not point at
//! an existing row, before the database ever sees the write.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use sea_orm::DatabaseConnection;

use crate::{
    database::{
        dto::{CreateVideogameData, UpdateVideogameData},
        repository::{
            developers_repository::DevelopersRepository, genres_repository::GenresRepository,
            videogames_repository::VideogamesRepository,
        },
    },
    entity::videogames,
    error::AppError,
    state::AppState,
};

pub(crate) async fn check_references(
    db: &DatabaseConnection,
    genre_id: Option<i32>,
    developer_id: Option<i32>,
) -> Result<(), AppError> {
    let mut errors = Vec::new();
    if let Some(id) = genre_id {
        if !GenresRepository::exists(db, id).await? {
            errors.push(format!("genre with id {id} does not exist"));
        }
    }
    if let Some(id) = developer_id {
        if !DevelopersRepository::exists(db, id).await? {
            errors.push(format!("developer with id {id} does not exist"));
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

pub async fn list_videogames(
    State(state): State<AppState>,
) -> Result<Json<Vec<videogames::Model>>, AppError> {
    let videogames = VideogamesRepository::find_all(&state.db).await?;
    Ok(Json(videogames))
}

pub async fn get_videogame(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<videogames::Model>, AppError> {
    let videogame = VideogamesRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("videogame", id))?;
    Ok(Json(videogame))
}

pub async fn create_videogame(
    State(state): State<AppState>,
    Json(payload): Json<CreateVideogameData>,
) -> Result<(StatusCode, Json<videogames::Model>), AppError> {
    let data = payload.validate().map_err(AppError::Validation)?;
    check_references(&state.db, data.genre_id, data.developer_id).await?;
    let videogame = VideogamesRepository::insert(&state.db, data).await?;
    Ok((StatusCode::CREATED, Json(videogame)))
}

pub async fn update_videogame(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CreateVideogameData>,
) -> Result<Json<videogames::Model>, AppError> {
    let data = payload.validate().map_err(AppError::Validation)?;
    check_references(&state.db, data.genre_id, data.developer_id).await?;
    let videogame = VideogamesRepository::update_full(&state.db, id, data)
        .await?
        .ok_or_else(|| AppError::not_found("videogame", id))?;
    Ok(Json(videogame))
}

pub async fn patch_videogame(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateVideogameData>,
) -> Result<Json<videogames::Model>, AppError> {
    let updates = payload.validate().map_err(AppError::Validation)?;
    // A null id clears the reference, so only real ids need checking.
    check_references(
        &state.db,
        updates.genre_id.flatten(),
        updates.developer_id.flatten(),
    )
    .await?;
    let videogame = VideogamesRepository::update_partial(&state.db, id, updates)
        .await?
        .ok_or_else(|| AppError::not_found("videogame", id))?;
    Ok(Json(videogame))
}

pub async fn delete_videogame(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let result = VideogamesRepository::delete(&state.db, id).await?;
    if result.rows_affected == 0 {
        return Err(AppError::not_found("videogame", id));
    }
    Ok(StatusCode::NO_CONTENT)
}
