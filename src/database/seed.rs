//! Startup data for a freshly created database.

use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, PaginatorTrait,
    TransactionTrait,
};
use tracing::info;

use crate::{
    entity::{developers, genres, prelude::Genres, reviews, users, videogames},
    error::AppError,
    password,
};

/// Inserts a small starter catalog the first time the application runs.
///
/// A non-empty genres table means the database was already seeded, so the
/// whole step is skipped.
pub async fn seed_if_empty(db: &DatabaseConnection) -> Result<(), AppError> {
    if Genres::find().count(db).await? > 0 {
        return Ok(());
    }
    info!("empty database, inserting starter data");

    let admin_hash = password::hash("admin1234")?;
    let player_hash = password::hash("player1234")?;

    let txn = db.begin().await?;

    let action = genres::ActiveModel {
        name: Set("Action".to_string()),
        description: Set("Fast-paced games built around combat and reflexes.".to_string()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    let adventure = genres::ActiveModel {
        name: Set("Adventure".to_string()),
        description: Set("Exploration and puzzle driven journeys.".to_string()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    let rpg = genres::ActiveModel {
        name: Set("RPG".to_string()),
        description: Set("Role-playing games with character progression.".to_string()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let studio_one = developers::ActiveModel {
        name: Set("Dev Studio 1".to_string()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    let studio_two = developers::ActiveModel {
        name: Set("Dev Studio 2".to_string()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    let studio_three = developers::ActiveModel {
        name: Set("Dev Studio 3".to_string()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let first_game = videogames::ActiveModel {
        title: Set("Super Action Game".to_string()),
        description: Set(Some("An explosive run through a collapsing city.".to_string())),
        genre_id: Set(Some(action.id)),
        developer_id: Set(Some(studio_one.id)),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    let second_game = videogames::ActiveModel {
        title: Set("Adventure Quest".to_string()),
        description: Set(Some("A journey across a hand-drawn world.".to_string())),
        genre_id: Set(Some(adventure.id)),
        developer_id: Set(Some(studio_two.id)),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    videogames::ActiveModel {
        title: Set("RPG Legends".to_string()),
        description: Set(Some("A party-based epic with branching quests.".to_string())),
        genre_id: Set(Some(rpg.id)),
        developer_id: Set(Some(studio_three.id)),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let admin = users::ActiveModel {
        id: Set(1),
        nick: Set("admin".to_string()),
        email: Set("admin@hotmail.es".to_string()),
        nif: Set(Some("1231231231".to_string())),
        password_hash: Set(admin_hash),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    // The web surface browses the library of this fixed account.
    users::ActiveModel {
        id: Set(2),
        nick: Set("player1".to_string()),
        email: Set("player1@hotmail.es".to_string()),
        nif: Set(None),
        password_hash: Set(player_hash),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    reviews::ActiveModel {
        rating: Set(8.6),
        comment: Set(Some("Great fun".to_string())),
        user_id: Set(admin.id),
        videogame_id: Set(first_game.id),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    reviews::ActiveModel {
        rating: Set(9.0),
        comment: Set(Some("Loved it".to_string())),
        user_id: Set(admin.id),
        videogame_id: Set(second_game.id),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    info!("starter data inserted");
    Ok(())
}
