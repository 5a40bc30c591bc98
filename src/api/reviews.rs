//! Review endpoints.
//!
//! Each user may review a game once. A second create for the same pair is
//! rejected with a conflict before it can trip the unique index.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use sea_orm::DatabaseConnection;

use crate::{
    database::{
        dto::{CreateReviewData, UpdateReviewData},
        repository::{
            reviews_repository::ReviewsRepository, users_repository::UsersRepository,
            videogames_repository::VideogamesRepository,
        },
    },
    entity::reviews,
    error::AppError,
    state::AppState,
};

async fn check_references(
    db: &DatabaseConnection,
    user_id: Option<i32>,
    videogame_id: Option<i32>,
) -> Result<(), AppError> {
    let mut errors = Vec::new();
    if let Some(id) = user_id {
        if !UsersRepository::exists(db, id).await? {
            errors.push(format!("user with id {id} does not exist"));
        }
    }
    if let Some(id) = videogame_id {
        if !VideogamesRepository::exists(db, id).await? {
            errors.push(format!("videogame with id {id} does not exist"));
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

fn duplicate_review(user_id: i32, videogame_id: i32) -> AppError {
    AppError::Conflict(format!(
        "user {user_id} already has a review for videogame {videogame_id}"
    ))
}

pub async fn list_reviews(
    State(state): State<AppState>,
) -> Result<Json<Vec<reviews::Model>>, AppError> {
    let reviews = ReviewsRepository::find_all(&state.db).await?;
    Ok(Json(reviews))
}

pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<reviews::Model>, AppError> {
    let review = ReviewsRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("review", id))?;
    Ok(Json(review))
}

pub async fn create_review(
    State(state): State<AppState>,
    Json(payload): Json<CreateReviewData>,
) -> Result<(StatusCode, Json<reviews::Model>), AppError> {
    let data = payload.validate().map_err(AppError::Validation)?;
    check_references(&state.db, Some(data.user_id), Some(data.videogame_id)).await?;
    if ReviewsRepository::exists_for_user_and_game(&state.db, data.user_id, data.videogame_id)
        .await?
    {
        return Err(duplicate_review(data.user_id, data.videogame_id));
    }
    let review = ReviewsRepository::insert(&state.db, data).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

pub async fn update_review(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CreateReviewData>,
) -> Result<Json<reviews::Model>, AppError> {
    let existing = ReviewsRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("review", id))?;
    let data = payload.validate().map_err(AppError::Validation)?;
    check_references(&state.db, Some(data.user_id), Some(data.videogame_id)).await?;
    if (data.user_id, data.videogame_id) != (existing.user_id, existing.videogame_id)
        && ReviewsRepository::exists_for_user_and_game(&state.db, data.user_id, data.videogame_id)
            .await?
    {
        return Err(duplicate_review(data.user_id, data.videogame_id));
    }
    let review = ReviewsRepository::update_full(&state.db, id, data)
        .await?
        .ok_or_else(|| AppError::not_found("review", id))?;
    Ok(Json(review))
}

pub async fn patch_review(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateReviewData>,
) -> Result<Json<reviews::Model>, AppError> {
    let existing = ReviewsRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("review", id))?;
    let updates = payload.validate().map_err(AppError::Validation)?;
    check_references(&state.db, updates.user_id, updates.videogame_id).await?;

    // The pair the row would hold after the patch.
    let target_user = updates.user_id.unwrap_or(existing.user_id);
    let target_game = updates.videogame_id.unwrap_or(existing.videogame_id);
    if (target_user, target_game) != (existing.user_id, existing.videogame_id)
        && ReviewsRepository::exists_for_user_and_game(&state.db, target_user, target_game).await?
    {
        return Err(duplicate_review(target_user, target_game));
    }

    let review = ReviewsRepository::update_partial(&state.db, id, updates)
        .await?
        .ok_or_else(|| AppError::not_found("review", id))?;
    Ok(Json(review))
}

pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let result = ReviewsRepository::delete(&state.db, id).await?;
    if result.rows_affected == 0 {
        return Err(AppError::not_found("review", id));
    }
    Ok(StatusCode::NO_CONTENT)
}
