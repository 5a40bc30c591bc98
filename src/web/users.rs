//! User browsing. Management goes through the API.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    database::repository::users_repository::UsersRepository,
    entity::users,
    error::AppError,
    state::AppState,
};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<users::Model>>, AppError> {
    let users = UsersRepository::find_all(&state.db).await?;
    Ok(Json(users))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<users::Model>, AppError> {
    let user = UsersRepository::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::not_found("user", user_id))?;
    Ok(Json(user))
}
