//! Library ownership flows: the JSON endpoints and the web download toggle.

mod common;

use axum::{
    Json,
    extract::{Form, Path, State},
    http::StatusCode,
};
use ludoteca::{
    api,
    database::{
        dto::CreateReviewData,
        repository::{
            library_repository::LibraryRepository, reviews_repository::ReviewsRepository,
        },
    },
    error::AppError,
    web,
};

#[tokio::test]
async fn api_add_list_remove_round_trip() {
    let state = common::test_state().await;

    let (status, Json(link)) = api::library::add_user_game(State(state.clone()), Path((2, 1)))
        .await
        .expect("add game");
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!((link.user_id, link.videogame_id), (2, 1));

    let Json(games) = api::library::list_user_games(State(state.clone()), Path(2))
        .await
        .expect("list");
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].id, 1);

    let err = api::library::add_user_game(State(state.clone()), Path((2, 1)))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    let status = api::library::remove_user_game(State(state.clone()), Path((2, 1)))
        .await
        .expect("remove");
    assert_eq!(status, StatusCode::NO_CONTENT);

    let Json(games) = api::library::list_user_games(State(state.clone()), Path(2))
        .await
        .expect("list again");
    assert!(games.is_empty());

    let err = api::library::remove_user_game(State(state.clone()), Path((2, 1)))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn api_library_rejects_missing_users_and_games() {
    let state = common::test_state().await;

    let err = api::library::add_user_game(State(state.clone()), Path((99, 1)))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = api::library::add_user_game(State(state.clone()), Path((2, 99)))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = api::library::list_user_games(State(state.clone()), Path(99))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn api_removal_deletes_only_that_users_review() {
    let state = common::test_state().await;

    api::library::add_user_game(State(state.clone()), Path((2, 1)))
        .await
        .expect("add game");
    api::reviews::create_review(
        State(state.clone()),
        Json(CreateReviewData {
            rating: 6.5,
            comment: Some("Decent".to_string()),
            user_id: 2,
            videogame_id: 1,
        }),
    )
    .await
    .expect("player review");

    let status = api::library::remove_user_game(State(state.clone()), Path((2, 1)))
        .await
        .expect("remove");
    assert_eq!(status, StatusCode::NO_CONTENT);

    let players = ReviewsRepository::find_by_user_and_game(&state.db, 2, 1)
        .await
        .unwrap();
    assert!(players.is_none());

    // The seeded admin review of the same game is untouched.
    let admins = ReviewsRepository::find_by_user_and_game(&state.db, 1, 1)
        .await
        .unwrap();
    assert!(admins.is_some());
}

#[tokio::test]
async fn web_toggle_flips_ownership_and_cleans_up_the_review() {
    let state = common::test_state().await;

    web::videogames::toggle_download(State(state.clone()), Path(3))
        .await
        .expect("download");
    assert!(
        LibraryRepository::owns_game(&state.db, web::LIBRARY_USER_ID, 3)
            .await
            .unwrap()
    );

    web::reviews::create(
        State(state.clone()),
        Path(3),
        Form(web::reviews::ReviewForm {
            rating: "9,5".to_string(),
            comment: "Superb".to_string(),
        }),
    )
    .await
    .expect("review");

    let Json(detail) = web::videogames::detail(State(state.clone()), Path(3))
        .await
        .expect("detail");
    assert!(detail.owned);
    let review = detail.review.expect("review visible in the detail");
    assert_eq!(review.rating, 9.5);

    web::videogames::toggle_download(State(state.clone()), Path(3))
        .await
        .expect("uninstall");
    assert!(
        !LibraryRepository::owns_game(&state.db, web::LIBRARY_USER_ID, 3)
            .await
            .unwrap()
    );
    let review = ReviewsRepository::find_by_user_and_game(&state.db, web::LIBRARY_USER_ID, 3)
        .await
        .unwrap();
    assert!(review.is_none());

    let Json(detail) = web::videogames::detail(State(state.clone()), Path(3))
        .await
        .expect("detail again");
    assert!(!detail.owned);
    assert!(detail.review.is_none());
}

#[tokio::test]
async fn web_library_lists_the_players_games() {
    let state = common::test_state().await;

    let Json(empty) = web::videogames::library(State(state.clone()))
        .await
        .expect("empty library");
    assert!(empty.is_empty());

    web::videogames::toggle_download(State(state.clone()), Path(2))
        .await
        .expect("download");
    web::videogames::toggle_download(State(state.clone()), Path(3))
        .await
        .expect("download");

    let Json(games) = web::videogames::library(State(state.clone()))
        .await
        .expect("library");
    let ids: Vec<i32> = games.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![2, 3]);
}
