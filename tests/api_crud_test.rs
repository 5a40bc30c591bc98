//! CRUD behavior of the JSON API, driven by calling the handlers directly.

mod common;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use ludoteca::{
    api,
    database::{
        dto::{
            CreateDeveloperData, CreateGenreData, CreateReviewData, CreateUserData,
            CreateVideogameData, UpdateGenreData, UpdateUserData,
        },
        repository::{
            users_repository::UsersRepository, videogames_repository::VideogamesRepository,
        },
    },
    error::AppError,
    password,
};
use serde_json::json;

fn expect_validation(err: AppError) -> Vec<String> {
    match err {
        AppError::Validation(errors) => errors,
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn videogame_crud_lifecycle() {
    let state = common::test_state().await;

    let payload = CreateVideogameData {
        title: "Test Game".to_string(),
        description: None,
        cover_url: None,
        genre_id: Some(1),
        developer_id: Some(1),
    };
    let (status, Json(created)) =
        api::videogames::create_videogame(State(state.clone()), Json(payload))
            .await
            .expect("create");
    assert_eq!(status, StatusCode::CREATED);
    assert!(created.id > 0);
    assert_eq!(created.title, "Test Game");
    assert_eq!(created.genre_id, Some(1));
    assert_eq!(created.developer_id, Some(1));

    let Json(fetched) = api::videogames::get_videogame(State(state.clone()), Path(created.id))
        .await
        .expect("fetch");
    assert_eq!(fetched.title, "Test Game");
    assert_eq!(fetched.genre_id, Some(1));

    let status = api::videogames::delete_videogame(State(state.clone()), Path(created.id))
        .await
        .expect("delete");
    assert_eq!(status, StatusCode::NO_CONTENT);

    let err = api::videogames::get_videogame(State(state.clone()), Path(created.id))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn blank_required_fields_are_rejected() {
    let state = common::test_state().await;

    let err = api::genres::create_genre(
        State(state.clone()),
        Json(CreateGenreData {
            name: "  ".to_string(),
            description: "fine".to_string(),
            image_url: None,
        }),
    )
    .await
    .unwrap_err();
    assert!(expect_validation(err).contains(&"name must not be empty".to_string()));

    let err = api::developers::create_developer(
        State(state.clone()),
        Json(CreateDeveloperData {
            name: String::new(),
            image_url: None,
        }),
    )
    .await
    .unwrap_err();
    assert!(expect_validation(err).contains(&"name must not be empty".to_string()));

    let err = api::videogames::create_videogame(
        State(state.clone()),
        Json(CreateVideogameData {
            title: " ".to_string(),
            description: None,
            cover_url: None,
            genre_id: None,
            developer_id: None,
        }),
    )
    .await
    .unwrap_err();
    assert!(expect_validation(err).contains(&"title must not be empty".to_string()));

    let err = api::users::create_user(
        State(state.clone()),
        Json(CreateUserData {
            nick: String::new(),
            email: "someone@example.com".to_string(),
            nif: None,
            password: "longenough".to_string(),
        }),
    )
    .await
    .unwrap_err();
    assert!(expect_validation(err).contains(&"nick must not be empty".to_string()));
}

#[tokio::test]
async fn review_referencing_missing_rows_is_rejected() {
    let state = common::test_state().await;

    let err = api::reviews::create_review(
        State(state.clone()),
        Json(CreateReviewData {
            rating: 7.0,
            comment: None,
            user_id: 99,
            videogame_id: 98,
        }),
    )
    .await
    .unwrap_err();
    let errors = expect_validation(err);
    assert!(errors.contains(&"user with id 99 does not exist".to_string()));
    assert!(errors.contains(&"videogame with id 98 does not exist".to_string()));
}

#[tokio::test]
async fn deleting_missing_ids_returns_not_found() {
    let state = common::test_state().await;

    let err = api::genres::delete_genre(State(state.clone()), Path(99))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = api::developers::delete_developer(State(state.clone()), Path(99))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = api::videogames::delete_videogame(State(state.clone()), Path(99))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = api::users::delete_user(State(state.clone()), Path(99))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = api::reviews::delete_review(State(state.clone()), Path(99))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn patch_distinguishes_absent_fields_from_nulls() {
    let state = common::test_state().await;

    let (_, Json(genre)) = api::genres::create_genre(
        State(state.clone()),
        Json(CreateGenreData {
            name: "Puzzle".to_string(),
            description: "Brain teasers".to_string(),
            image_url: Some("http://img/puzzle.png".to_string()),
        }),
    )
    .await
    .expect("create");

    // An empty patch touches nothing.
    let patch: UpdateGenreData = serde_json::from_value(json!({})).unwrap();
    let Json(unchanged) =
        api::genres::patch_genre(State(state.clone()), Path(genre.id), Json(patch))
            .await
            .expect("empty patch");
    assert_eq!(
        unchanged.image_url.as_deref(),
        Some("http://img/puzzle.png")
    );
    assert_eq!(unchanged.name, "Puzzle");

    // An explicit null clears the column.
    let patch: UpdateGenreData = serde_json::from_value(json!({ "image_url": null })).unwrap();
    let Json(cleared) =
        api::genres::patch_genre(State(state.clone()), Path(genre.id), Json(patch))
            .await
            .expect("null patch");
    assert_eq!(cleared.image_url, None);

    // A supplied value replaces it again.
    let patch: UpdateGenreData =
        serde_json::from_value(json!({ "image_url": "http://img/new.png" })).unwrap();
    let Json(replaced) =
        api::genres::patch_genre(State(state.clone()), Path(genre.id), Json(patch))
            .await
            .expect("value patch");
    assert_eq!(replaced.image_url.as_deref(), Some("http://img/new.png"));
}

#[tokio::test]
async fn passwords_are_hashed_and_never_serialized() {
    let state = common::test_state().await;

    let (status, Json(user)) = api::users::create_user(
        State(state.clone()),
        Json(CreateUserData {
            nick: "reviewer".to_string(),
            email: "reviewer@example.com".to_string(),
            nif: None,
            password: "plaintext-secret".to_string(),
        }),
    )
    .await
    .expect("create user");
    assert_eq!(status, StatusCode::CREATED);

    let body = serde_json::to_value(&user).unwrap();
    assert!(body.get("password_hash").is_none());
    assert!(body.get("password").is_none());

    assert_ne!(user.password_hash, "plaintext-secret");
    assert!(password::verify("plaintext-secret", &user.password_hash));
}

#[tokio::test]
async fn user_updates_rehash_only_when_a_password_is_sent() {
    let state = common::test_state().await;

    let before = UsersRepository::find_by_id(&state.db, 1)
        .await
        .unwrap()
        .expect("seeded admin");

    // A patch without a password keeps the stored hash.
    let patch: UpdateUserData = serde_json::from_value(json!({ "nick": "admin2" })).unwrap();
    let Json(patched) = api::users::patch_user(State(state.clone()), Path(1), Json(patch))
        .await
        .expect("patch nick");
    assert_eq!(patched.nick, "admin2");
    assert_eq!(patched.password_hash, before.password_hash);

    // Sending one replaces the hash with a verifying one.
    let patch: UpdateUserData =
        serde_json::from_value(json!({ "password": "fresh-secret-1" })).unwrap();
    let Json(rehashed) = api::users::patch_user(State(state.clone()), Path(1), Json(patch))
        .await
        .expect("patch password");
    assert_ne!(rehashed.password_hash, before.password_hash);
    assert!(password::verify("fresh-secret-1", &rehashed.password_hash));

    // A full update replaces every column, including an omitted nif.
    let Json(replaced) = api::users::update_user(
        State(state.clone()),
        Path(1),
        Json(CreateUserData {
            nick: "admin".to_string(),
            email: "admin@hotmail.es".to_string(),
            nif: None,
            password: "admin1234".to_string(),
        }),
    )
    .await
    .expect("full update");
    assert_eq!(replaced.nif, None);
}

#[tokio::test]
async fn deleting_a_genre_detaches_its_games() {
    let state = common::test_state().await;

    let seeded = VideogamesRepository::find_by_id(&state.db, 1)
        .await
        .unwrap()
        .expect("seeded game");
    let genre_id = seeded.genre_id.expect("seeded game has a genre");

    let status = api::genres::delete_genre(State(state.clone()), Path(genre_id))
        .await
        .expect("delete genre");
    assert_eq!(status, StatusCode::NO_CONTENT);

    let detached = VideogamesRepository::find_by_id(&state.db, 1)
        .await
        .unwrap()
        .expect("game survives");
    assert_eq!(detached.genre_id, None);
}
