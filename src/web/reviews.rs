//! Review form flows for the player's account.
//!
//! A duplicate submission is not an error here: the browser just lands back
//! on the game detail.

use axum::{
    extract::{Form, Path, State},
    response::Redirect,
};
use serde::Deserialize;

use crate::{
    database::{
        dto::{self, CreateReviewData},
        repository::{
            reviews_repository::ReviewsRepository, users_repository::UsersRepository,
            videogames_repository::VideogamesRepository,
        },
    },
    error::AppError,
    state::AppState,
    web::LIBRARY_USER_ID,
};

#[derive(Deserialize)]
pub struct ReviewForm {
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub comment: String,
}

impl ReviewForm {
    /// Rating arrives as text; "8,6" and "8.6" both mean 8.6.
    fn rating_value(&self) -> Result<f64, Vec<String>> {
        dto::parse_rating(&self.rating)
            .and_then(dto::validate_rating)
            .map_err(|e| vec![e])
    }
}

fn back_to_detail(game_id: i32) -> Redirect {
    Redirect::to(&format!("/videogame/{game_id}"))
}

pub async fn create(
    State(state): State<AppState>,
    Path(game_id): Path<i32>,
    Form(form): Form<ReviewForm>,
) -> Result<Redirect, AppError> {
    if !UsersRepository::exists(&state.db, LIBRARY_USER_ID).await? {
        return Err(AppError::not_found("user", LIBRARY_USER_ID));
    }
    if !VideogamesRepository::exists(&state.db, game_id).await? {
        return Err(AppError::not_found("videogame", game_id));
    }
    let rating = form.rating_value().map_err(AppError::Validation)?;

    if ReviewsRepository::exists_for_user_and_game(&state.db, LIBRARY_USER_ID, game_id).await? {
        // one review per game; keep the existing one
        return Ok(back_to_detail(game_id));
    }

    let data = CreateReviewData {
        rating,
        comment: dto::optional_text(Some(form.comment)),
        user_id: LIBRARY_USER_ID,
        videogame_id: game_id,
    };
    ReviewsRepository::insert(&state.db, data).await?;
    Ok(back_to_detail(game_id))
}

pub async fn edit(
    State(state): State<AppState>,
    Path(game_id): Path<i32>,
    Form(form): Form<ReviewForm>,
) -> Result<Redirect, AppError> {
    if !UsersRepository::exists(&state.db, LIBRARY_USER_ID).await? {
        return Err(AppError::not_found("user", LIBRARY_USER_ID));
    }
    let rating = form.rating_value().map_err(AppError::Validation)?;

    let Some(review) =
        ReviewsRepository::find_by_user_and_game(&state.db, LIBRARY_USER_ID, game_id).await?
    else {
        // nothing to edit
        return Ok(back_to_detail(game_id));
    };

    let data = CreateReviewData {
        rating,
        comment: dto::optional_text(Some(form.comment)),
        user_id: LIBRARY_USER_ID,
        videogame_id: game_id,
    };
    ReviewsRepository::update_full(&state.db, review.id, data).await?;
    Ok(back_to_detail(game_id))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(game_id): Path<i32>,
) -> Result<Redirect, AppError> {
    if !UsersRepository::exists(&state.db, LIBRARY_USER_ID).await? {
        return Err(AppError::not_found("user", LIBRARY_USER_ID));
    }
    ReviewsRepository::delete_by_user_and_game(&state.db, LIBRARY_USER_ID, game_id).await?;
    Ok(back_to_detail(game_id))
}
