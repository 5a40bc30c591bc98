//! Developer endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    database::{
        dto::{CreateDeveloperData, UpdateDeveloperData},
        repository::developers_repository::DevelopersRepository,
    },
    entity::developers,
    error::AppError,
    state::AppState,
};

pub async fn list_developers(
    State(state): State<AppState>,
) -> Result<Json<Vec<developers::Model>>, AppError> {
    let developers = DevelopersRepository::find_all(&state.db).await?;
    Ok(Json(developers))
}

pub async fn get_developer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<developers::Model>, AppError> {
    let developer = DevelopersRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("developer", id))?;
    Ok(Json(developer))
}

pub async fn create_developer(
    State(state): State<AppState>,
    Json(payload): Json<CreateDeveloperData>,
) -> Result<(StatusCode, Json<developers::Model>), AppError> {
    let data = payload.validate().map_err(AppError::Validation)?;
    let developer = DevelopersRepository::insert(&state.db, data).await?;
    Ok((StatusCode::CREATED, Json(developer)))
}

pub async fn update_developer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CreateDeveloperData>,
) -> Result<Json<developers::Model>, AppError> {
    let data = payload.validate().map_err(AppError::Validation)?;
    let developer = DevelopersRepository::update_full(&state.db, id, data)
        .await?
        .ok_or_else(|| AppError::not_found("developer", id))?;
    Ok(Json(developer))
}

pub async fn patch_developer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDeveloperData>,
) -> Result<Json<developers::Model>, AppError> {
    let updates = payload.validate().map_err(AppError::Validation)?;
    let developer = DevelopersRepository::update_partial(&state.db, id, updates)
        .await?
        .ok_or_else(|| AppError::not_found("developer", id))?;
    Ok(Json(developer))
}

pub async fn delete_developer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let result = DevelopersRepository::delete(&state.db, id).await?;
    if result.rows_affected == 0 {
        return Err(AppError::not_found("developer", id));
    }
    Ok(StatusCode::NO_CONTENT)
}
