//! Videogame data repository.

use crate::database::dto::{CreateVideogameData, UpdateVideogameData};
use crate::entity::prelude::*;
use crate::entity::videogames;
use sea_orm::*;

/// Videogame data repository.
pub struct VideogamesRepository;

impl VideogamesRepository {
    /// Inserts a videogame.
    pub async fn insert(
        db: &DatabaseConnection,
        videogame: CreateVideogameData,
    ) -> Result<videogames::Model, DbErr> {
        let now = chrono::Utc::now().timestamp() as i32;

        let active = videogames::ActiveModel {
            id: NotSet,
            title: Set(videogame.title),
            description: Set(videogame.description),
            cover_url: Set(videogame.cover_url),
            genre_id: Set(videogame.genre_id),
            developer_id: Set(videogame.developer_id),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
        };

        active.insert(db).await
    }

    /// All videogames in insertion order.
    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<videogames::Model>, DbErr> {
        Videogames::find()
            .order_by_asc(videogames::Column::Id)
            .all(db)
            .await
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<videogames::Model>, DbErr> {
        Videogames::find_by_id(id).one(db).await
    }

    /// The most recently added videogames.
    pub async fn find_latest(
        db: &DatabaseConnection,
        limit: u64,
    ) -> Result<Vec<videogames::Model>, DbErr> {
        Videogames::find()
            .order_by_desc(videogames::Column::Id)
            .limit(limit)
            .all(db)
            .await
    }

    /// All videogames tagged with the genre.
    pub async fn find_by_genre(
        db: &DatabaseConnection,
        genre_id: i32,
    ) -> Result<Vec<videogames::Model>, DbErr> {
        Videogames::find()
            .filter(videogames::Column::GenreId.eq(genre_id))
            .order_by_asc(videogames::Column::Id)
            .all(db)
            .await
    }

    /// All videogames credited to the developer.
    pub async fn find_by_developer(
        db: &DatabaseConnection,
        developer_id: i32,
    ) -> Result<Vec<videogames::Model>, DbErr> {
        Videogames::find()
            .filter(videogames::Column::DeveloperId.eq(developer_id))
            .order_by_asc(videogames::Column::Id)
            .all(db)
            .await
    }

    /// Replaces every writable column. Returns None when the videogame
    /// does not exist.
    pub async fn update_full(
        db: &DatabaseConnection,
        id: i32,
        videogame: CreateVideogameData,
    ) -> Result<Option<videogames::Model>, DbErr> {
        let Some(existing) = Videogames::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let mut active: videogames::ActiveModel = existing.into();
        active.title = Set(videogame.title);
        active.description = Set(videogame.description);
        active.cover_url = Set(videogame.cover_url);
        active.genre_id = Set(videogame.genre_id);
        active.developer_id = Set(videogame.developer_id);
        active.updated_at = Set(Some(chrono::Utc::now().timestamp() as i32));

        active.update(db).await.map(Some)
    }

    /// Applies only the provided fields. Returns None when the videogame
    /// does not exist.
    pub async fn update_partial(
        db: &DatabaseConnection,
        id: i32,
        updates: UpdateVideogameData,
    ) -> Result<Option<videogames::Model>, DbErr> {
        if Videogames::find_by_id(id).one(db).await?.is_none() {
            return Ok(None);
        }

        let active = videogames::ActiveModel {
            id: Set(id),
            title: updates.title.map_or(NotSet, Set),
            description: updates.description.map_or(NotSet, Set),
            cover_url: updates.cover_url.map_or(NotSet, Set),
            genre_id: updates.genre_id.map_or(NotSet, Set),
            developer_id: updates.developer_id.map_or(NotSet, Set),
            updated_at: Set(Some(chrono::Utc::now().timestamp() as i32)),
            ..Default::default()
        };

        active.update(db).await.map(Some)
    }

    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<DeleteResult, DbErr> {
        Videogames::delete_by_id(id).exec(db).await
    }

    pub async fn exists(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
        Ok(Videogames::find_by_id(id).count(db).await? > 0)
    }
}
