//! User endpoints.
//!
//! Incoming payloads carry a plaintext password; it is hashed here and only
//! the hash is stored. Serialized users never include the hash.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    database::{
        dto::{CreateUserData, UpdateUserData},
        repository::users_repository::UsersRepository,
    },
    entity::users,
    error::AppError,
    password,
    state::AppState,
};

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<users::Model>>, AppError> {
    let users = UsersRepository::find_all(&state.db).await?;
    Ok(Json(users))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<users::Model>, AppError> {
    let user = UsersRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("user", id))?;
    Ok(Json(user))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserData>,
) -> Result<(StatusCode, Json<users::Model>), AppError> {
    let data = payload.validate().map_err(AppError::Validation)?;
    let password_hash = password::hash(&data.password)?;
    let user = UsersRepository::insert(&state.db, data, password_hash).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CreateUserData>,
) -> Result<Json<users::Model>, AppError> {
    let data = payload.validate().map_err(AppError::Validation)?;
    let password_hash = password::hash(&data.password)?;
    let user = UsersRepository::update_full(&state.db, id, data, password_hash)
        .await?
        .ok_or_else(|| AppError::not_found("user", id))?;
    Ok(Json(user))
}

pub async fn patch_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserData>,
) -> Result<Json<users::Model>, AppError> {
    let updates = payload.validate().map_err(AppError::Validation)?;
    let password_hash = match updates.password.as_deref() {
        Some(plain) => Some(password::hash(plain)?),
        None => None,
    };
    let user = UsersRepository::update_partial(&state.db, id, updates, password_hash)
        .await?
        .ok_or_else(|| AppError::not_found("user", id))?;
    Ok(Json(user))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let result = UsersRepository::delete(&state.db, id).await?;
    if result.rows_affected == 0 {
        return Err(AppError::not_found("user", id));
    }
    Ok(StatusCode::NO_CONTENT)
}
