//! Review lifecycle: one review per (user, game), web forms, rating rules.

mod common;

use axum::{
    Json,
    extract::{Form, Path, State},
    http::StatusCode,
};
use ludoteca::{
    api,
    database::{
        dto::{CreateReviewData, UpdateReviewData},
        repository::reviews_repository::ReviewsRepository,
    },
    error::AppError,
    web::{self, reviews::ReviewForm},
};
use serde_json::json;

fn review_form(rating: &str, comment: &str) -> Form<ReviewForm> {
    Form(ReviewForm {
        rating: rating.to_string(),
        comment: comment.to_string(),
    })
}

#[tokio::test]
async fn duplicate_web_submission_keeps_the_first_review() {
    let state = common::test_state().await;

    web::reviews::create(State(state.clone()), Path(1), review_form("7,5", "Nice"))
        .await
        .expect("first submission");
    web::reviews::create(State(state.clone()), Path(1), review_form("9.0", "Changed my mind"))
        .await
        .expect("second submission redirects silently");

    let review = ReviewsRepository::find_by_user_and_game(&state.db, web::LIBRARY_USER_ID, 1)
        .await
        .unwrap()
        .expect("one review stored");
    assert_eq!(review.rating, 7.5);
    assert_eq!(review.comment.as_deref(), Some("Nice"));
}

#[tokio::test]
async fn duplicate_api_creation_is_a_conflict() {
    let state = common::test_state().await;

    // The seed already has the admin reviewing game 1.
    let err = api::reviews::create_review(
        State(state.clone()),
        Json(CreateReviewData {
            rating: 5.0,
            comment: None,
            user_id: 1,
            videogame_id: 1,
        }),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    let review = ReviewsRepository::find_by_user_and_game(&state.db, 1, 1)
        .await
        .unwrap()
        .expect("seeded review survives");
    assert_eq!(review.rating, 8.6);
}

#[tokio::test]
async fn api_rating_accepts_numbers_and_comma_or_dot_strings() {
    let state = common::test_state().await;

    let payload: CreateReviewData = serde_json::from_value(json!({
        "rating": "8,6",
        "user_id": 2,
        "videogame_id": 2,
    }))
    .unwrap();
    let (status, Json(created)) = api::reviews::create_review(State(state.clone()), Json(payload))
        .await
        .expect("string rating");
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created.rating, 8.6);

    let payload: CreateReviewData = serde_json::from_value(json!({
        "rating": 7.25,
        "user_id": 2,
        "videogame_id": 3,
    }))
    .unwrap();
    let (_, Json(rounded)) = api::reviews::create_review(State(state.clone()), Json(payload))
        .await
        .expect("number rating");
    assert_eq!(rounded.rating, 7.3);
}

#[tokio::test]
async fn rating_bounds_are_inclusive() {
    let state = common::test_state().await;

    let err = web::reviews::create(State(state.clone()), Path(1), review_form("0", ""))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let err = web::reviews::create(State(state.clone()), Path(1), review_form("11", ""))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    web::reviews::create(State(state.clone()), Path(2), review_form("1", ""))
        .await
        .expect("lower bound accepted");
    web::reviews::create(State(state.clone()), Path(3), review_form("10", ""))
        .await
        .expect("upper bound accepted");

    let low = ReviewsRepository::find_by_user_and_game(&state.db, web::LIBRARY_USER_ID, 2)
        .await
        .unwrap()
        .expect("stored");
    assert_eq!(low.rating, 1.0);
    let high = ReviewsRepository::find_by_user_and_game(&state.db, web::LIBRARY_USER_ID, 3)
        .await
        .unwrap()
        .expect("stored");
    assert_eq!(high.rating, 10.0);
}

#[tokio::test]
async fn web_edit_and_delete_flow() {
    let state = common::test_state().await;

    // Editing before any review exists is a silent no-op.
    web::reviews::edit(State(state.clone()), Path(2), review_form("9.0", ""))
        .await
        .expect("no-op edit");
    assert!(
        ReviewsRepository::find_by_user_and_game(&state.db, web::LIBRARY_USER_ID, 2)
            .await
            .unwrap()
            .is_none()
    );

    web::reviews::create(State(state.clone()), Path(2), review_form("8.6", "Great"))
        .await
        .expect("create");
    web::reviews::edit(State(state.clone()), Path(2), review_form("9,0", " "))
        .await
        .expect("edit");

    let review = ReviewsRepository::find_by_user_and_game(&state.db, web::LIBRARY_USER_ID, 2)
        .await
        .unwrap()
        .expect("edited review");
    assert_eq!(review.rating, 9.0);
    assert_eq!(review.comment, None);

    web::reviews::delete(State(state.clone()), Path(2))
        .await
        .expect("delete");
    assert!(
        ReviewsRepository::find_by_user_and_game(&state.db, web::LIBRARY_USER_ID, 2)
            .await
            .unwrap()
            .is_none()
    );

    // Deleting again still just redirects.
    web::reviews::delete(State(state.clone()), Path(2))
        .await
        .expect("repeat delete");
}

#[tokio::test]
async fn moving_a_review_onto_a_reviewed_game_conflicts() {
    let state = common::test_state().await;

    // Seeded: admin reviewed games 1 and 2. Pointing review 2 at game 1
    // would give the admin two reviews of game 1.
    let err = api::reviews::update_review(
        State(state.clone()),
        Path(2),
        Json(CreateReviewData {
            rating: 9.0,
            comment: None,
            user_id: 1,
            videogame_id: 1,
        }),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    let patch: UpdateReviewData = serde_json::from_value(json!({ "videogame_id": 1 })).unwrap();
    let err = api::reviews::patch_review(State(state.clone()), Path(2), Json(patch))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    // A patch that keeps the pair is fine.
    let patch: UpdateReviewData = serde_json::from_value(json!({ "rating": "7,1" })).unwrap();
    let Json(updated) = api::reviews::patch_review(State(state.clone()), Path(2), Json(patch))
        .await
        .expect("rating patch");
    assert_eq!(updated.rating, 7.1);
}
