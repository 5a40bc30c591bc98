//! Genre data repository.

use crate::database::dto::{CreateGenreData, UpdateGenreData};
use crate::entity::genres;
use crate::entity::prelude::*;
use sea_orm::*;

/// Genre data repository.
pub struct GenresRepository;

impl GenresRepository {
    /// Inserts a genre.
    pub async fn insert(
        db: &DatabaseConnection,
        genre: CreateGenreData,
    ) -> Result<genres::Model, DbErr> {
        let now = chrono::Utc::now().timestamp() as i32;

        let active = genres::ActiveModel {
            id: NotSet,
            name: Set(genre.name),
            description: Set(genre.description),
            image_url: Set(genre.image_url),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
        };

        active.insert(db).await
    }

    /// All genres, sorted alphabetically.
    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<genres::Model>, DbErr> {
        Genres::find()
            .order_by_asc(genres::Column::Name)
            .all(db)
            .await
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<genres::Model>, DbErr> {
        Genres::find_by_id(id).one(db).await
    }

    /// Replaces every writable column. Returns None when the genre does
    /// not exist.
    pub async fn update_full(
        db: &DatabaseConnection,
        id: i32,
        genre: CreateGenreData,
    ) -> Result<Option<genres::Model>, DbErr> {
        let Some(existing) = Genres::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let mut active: genres::ActiveModel = existing.into();
        active.name = Set(genre.name);
        active.description = Set(genre.description);
        active.image_url = Set(genre.image_url);
        active.updated_at = Set(Some(chrono::Utc::now().timestamp() as i32));

        active.update(db).await.map(Some)
    }

    /// Applies only the provided fields. Returns None when the genre does
    /// not exist.
    pub async fn update_partial(
        db: &DatabaseConnection,
        id: i32,
        updates: UpdateGenreData,
    ) -> Result<Option<genres::Model>, DbErr> {
        if Genres::find_by_id(id).one(db).await?.is_none() {
            return Ok(None);
        }

        let active = genres::ActiveModel {
            id: Set(id),
            name: updates.name.map_or(NotSet, Set),
            description: updates.description.map_or(NotSet, Set),
            image_url: updates.image_url.map_or(NotSet, Set),
            updated_at: Set(Some(chrono::Utc::now().timestamp() as i32)),
            ..Default::default()
        };

        active.update(db).await.map(Some)
    }

    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<DeleteResult, DbErr> {
        Genres::delete_by_id(id).exec(db).await
    }

    pub async fn exists(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
        Ok(Genres::find_by_id(id).count(db).await? > 0)
    }
}
