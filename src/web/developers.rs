//! Developer browsing and form CRUD.

use axum::{
    Json,
    extract::{Form, Path, State},
    response::Redirect,
};
use serde::{Deserialize, Serialize};

use crate::{
    database::{
        dto::{CreateDeveloperData, UpdateDeveloperData},
        repository::{
            developers_repository::DevelopersRepository,
            videogames_repository::VideogamesRepository,
        },
    },
    entity::{developers, videogames},
    error::AppError,
    state::AppState,
};

/// A developer together with the games credited to it.
#[derive(Serialize)]
pub struct DeveloperDetail {
    pub developer: developers::Model,
    pub videogames: Vec<videogames::Model>,
}

/// The developer form carries the name only.
#[derive(Deserialize)]
pub struct DeveloperForm {
    #[serde(default)]
    pub name: String,
}

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<developers::Model>>, AppError> {
    let developers = DevelopersRepository::find_all(&state.db).await?;
    Ok(Json(developers))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(developer_id): Path<i32>,
) -> Result<Json<DeveloperDetail>, AppError> {
    let developer = DevelopersRepository::find_by_id(&state.db, developer_id)
        .await?
        .ok_or_else(|| AppError::not_found("developer", developer_id))?;
    let videogames = VideogamesRepository::find_by_developer(&state.db, developer_id).await?;
    Ok(Json(DeveloperDetail {
        developer,
        videogames,
    }))
}

pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<DeveloperForm>,
) -> Result<Redirect, AppError> {
    let data = CreateDeveloperData {
        name: form.name,
        image_url: None,
    }
    .validate()
    .map_err(AppError::Validation)?;

    if DevelopersRepository::exists_by_name(&state.db, &data.name).await? {
        return Err(AppError::Validation(vec![format!(
            "a developer named '{}' already exists",
            data.name
        )]));
    }

    let developer = DevelopersRepository::insert(&state.db, data).await?;
    Ok(Redirect::to(&format!("/developers/{}", developer.id)))
}

pub async fn edit(
    State(state): State<AppState>,
    Path(developer_id): Path<i32>,
    Form(form): Form<DeveloperForm>,
) -> Result<Redirect, AppError> {
    if !DevelopersRepository::exists(&state.db, developer_id).await? {
        return Err(AppError::not_found("developer", developer_id));
    }

    // The form has no image field, so only the name changes.
    let updates = UpdateDeveloperData {
        name: Some(form.name),
        image_url: None,
    }
    .validate()
    .map_err(AppError::Validation)?;

    DevelopersRepository::update_partial(&state.db, developer_id, updates)
        .await?
        .ok_or_else(|| AppError::not_found("developer", developer_id))?;
    Ok(Redirect::to(&format!("/developers/{developer_id}")))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(developer_id): Path<i32>,
) -> Result<Redirect, AppError> {
    let result = DevelopersRepository::delete(&state.db, developer_id).await?;
    if result.rows_affected == 0 {
        return Err(AppError::not_found("developer", developer_id));
    }
    Ok(Redirect::to("/developers"))
}
