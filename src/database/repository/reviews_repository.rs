//! Review data repository.

use crate::database::dto::{CreateReviewData, UpdateReviewData};
use crate::entity::prelude::*;
use crate::entity::reviews;
use sea_orm::*;

/// Review data repository.
pub struct ReviewsRepository;

impl ReviewsRepository {
    /// Inserts a review.
    pub async fn insert(
        db: &DatabaseConnection,
        review: CreateReviewData,
    ) -> Result<reviews::Model, DbErr> {
        let now = chrono::Utc::now().timestamp() as i32;

        let active = reviews::ActiveModel {
            id: NotSet,
            rating: Set(review.rating),
            comment: Set(review.comment),
            user_id: Set(review.user_id),
            videogame_id: Set(review.videogame_id),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
        };

        active.insert(db).await
    }

    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<reviews::Model>, DbErr> {
        Reviews::find()
            .order_by_asc(reviews::Column::Id)
            .all(db)
            .await
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<reviews::Model>, DbErr> {
        Reviews::find_by_id(id).one(db).await
    }

    /// The review a user wrote for a game, if any.
    pub async fn find_by_user_and_game(
        db: &DatabaseConnection,
        user_id: i32,
        videogame_id: i32,
    ) -> Result<Option<reviews::Model>, DbErr> {
        Reviews::find()
            .filter(
                reviews::Column::UserId
                    .eq(user_id)
                    .and(reviews::Column::VideogameId.eq(videogame_id)),
            )
            .one(db)
            .await
    }

    pub async fn exists_for_user_and_game(
        db: &DatabaseConnection,
        user_id: i32,
        videogame_id: i32,
    ) -> Result<bool, DbErr> {
        let count = Reviews::find()
            .filter(
                reviews::Column::UserId
                    .eq(user_id)
                    .and(reviews::Column::VideogameId.eq(videogame_id)),
            )
            .count(db)
            .await?;

        Ok(count > 0)
    }

    /// Replaces every writable column. Returns None when the review does
    /// not exist.
    pub async fn update_full(
        db: &DatabaseConnection,
        id: i32,
        review: CreateReviewData,
    ) -> Result<Option<reviews::Model>, DbErr> {
        let Some(existing) = Reviews::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let mut active: reviews::ActiveModel = existing.into();
        active.rating = Set(review.rating);
        active.comment = Set(review.comment);
        active.user_id = Set(review.user_id);
        active.videogame_id = Set(review.videogame_id);
        active.updated_at = Set(Some(chrono::Utc::now().timestamp() as i32));

        active.update(db).await.map(Some)
    }

    /// Applies only the provided fields. Returns None when the review
    /// does not exist.
    pub async fn update_partial(
        db: &DatabaseConnection,
        id: i32,
        updates: UpdateReviewData,
    ) -> Result<Option<reviews::Model>, DbErr> {
        if Reviews::find_by_id(id).one(db).await?.is_none() {
            return Ok(None);
        }

        let active = reviews::ActiveModel {
            id: Set(id),
            rating: updates.rating.map_or(NotSet, Set),
            comment: updates.comment.map_or(NotSet, Set),
            user_id: updates.user_id.map_or(NotSet, Set),
            videogame_id: updates.videogame_id.map_or(NotSet, Set),
            updated_at: Set(Some(chrono::Utc::now().timestamp() as i32)),
            ..Default::default()
        };

        active.update(db).await.map(Some)
    }

    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<DeleteResult, DbErr> {
        Reviews::delete_by_id(id).exec(db).await
    }

    /// Removes a user's review of one game.
    pub async fn delete_by_user_and_game(
        db: &DatabaseConnection,
        user_id: i32,
        videogame_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        Reviews::delete_many()
            .filter(
                reviews::Column::UserId
                    .eq(user_id)
                    .and(reviews::Column::VideogameId.eq(videogame_id)),
            )
            .exec(db)
            .await
    }
}
