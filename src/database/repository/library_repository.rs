//! Owned-games relation between users and videogames.

use crate::entity::prelude::*;
use crate::entity::{reviews, user_games, videogames};
use sea_orm::*;

/// User library repository.
pub struct LibraryRepository;

impl LibraryRepository {
    /// The videogames in a user's library.
    pub async fn find_games_of_user(
        db: &DatabaseConnection,
        user_id: i32,
    ) -> Result<Vec<videogames::Model>, DbErr> {
        Videogames::find()
            .inner_join(user_games::Entity)
            .filter(user_games::Column::UserId.eq(user_id))
            .order_by_asc(videogames::Column::Id)
            .all(db)
            .await
    }

    /// Whether the user owns the game.
    pub async fn owns_game(
        db: &DatabaseConnection,
        user_id: i32,
        videogame_id: i32,
    ) -> Result<bool, DbErr> {
        let count = UserGames::find()
            .filter(
                user_games::Column::UserId
                    .eq(user_id)
                    .and(user_games::Column::VideogameId.eq(videogame_id)),
            )
            .count(db)
            .await?;

        Ok(count > 0)
    }

    /// Adds a game to the user's library.
    pub async fn add_game(
        db: &DatabaseConnection,
        user_id: i32,
        videogame_id: i32,
    ) -> Result<user_games::Model, DbErr> {
        let now = chrono::Utc::now().timestamp() as i32;

        let link = user_games::ActiveModel {
            user_id: Set(user_id),
            videogame_id: Set(videogame_id),
            created_at: Set(Some(now)),
        };

        // composite primary key, so skip the last-insert-id round trip
        UserGames::insert(link).exec_without_returning(db).await?;

        UserGames::find_by_id((user_id, videogame_id))
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("library link not found after insert".to_string()))
    }

    /// Removes a game from the user's library, deleting that user's
    /// reviews for it in the same transaction.
    pub async fn remove_game(
        db: &DatabaseConnection,
        user_id: i32,
        videogame_id: i32,
    ) -> Result<(), DbErr> {
        let txn = db.begin().await?;

        Reviews::delete_many()
            .filter(
                reviews::Column::UserId
                    .eq(user_id)
                    .and(reviews::Column::VideogameId.eq(videogame_id)),
            )
            .exec(&txn)
            .await?;

        UserGames::delete_many()
            .filter(
                user_games::Column::UserId
                    .eq(user_id)
                    .and(user_games::Column::VideogameId.eq(videogame_id)),
            )
            .exec(&txn)
            .await?;

        txn.commit().await?;
        Ok(())
    }
}
