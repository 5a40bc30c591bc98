//! Developer data repository.

use crate::database::dto::{CreateDeveloperData, UpdateDeveloperData};
use crate::entity::developers;
use crate::entity::prelude::*;
use sea_orm::*;

/// Developer data repository.
pub struct DevelopersRepository;

impl DevelopersRepository {
    /// Inserts a developer.
    pub async fn insert(
        db: &DatabaseConnection,
        developer: CreateDeveloperData,
    ) -> Result<developers::Model, DbErr> {
        let now = chrono::Utc::now().timestamp() as i32;

        let active = developers::ActiveModel {
            id: NotSet,
            name: Set(developer.name),
            image_url: Set(developer.image_url),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
        };

        active.insert(db).await
    }

    /// All developers, sorted alphabetically.
    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<developers::Model>, DbErr> {
        Developers::find()
            .order_by_asc(developers::Column::Name)
            .all(db)
            .await
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<developers::Model>, DbErr> {
        Developers::find_by_id(id).one(db).await
    }

    /// Replaces every writable column. Returns None when the developer
    /// does not exist.
    pub async fn update_full(
        db: &DatabaseConnection,
        id: i32,
        developer: CreateDeveloperData,
    ) -> Result<Option<developers::Model>, DbErr> {
        let Some(existing) = Developers::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let mut active: developers::ActiveModel = existing.into();
        active.name = Set(developer.name);
        active.image_url = Set(developer.image_url);
        active.updated_at = Set(Some(chrono::Utc::now().timestamp() as i32));

        active.update(db).await.map(Some)
    }

    /// Applies only the provided fields. Returns None when the developer
    /// does not exist.
    pub async fn update_partial(
        db: &DatabaseConnection,
        id: i32,
        updates: UpdateDeveloperData,
    ) -> Result<Option<developers::Model>, DbErr> {
        if Developers::find_by_id(id).one(db).await?.is_none() {
            return Ok(None);
        }

        let active = developers::ActiveModel {
            id: Set(id),
            name: updates.name.map_or(NotSet, Set),
            image_url: updates.image_url.map_or(NotSet, Set),
            updated_at: Set(Some(chrono::Utc::now().timestamp() as i32)),
            ..Default::default()
        };

        active.update(db).await.map(Some)
    }

    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<DeleteResult, DbErr> {
        Developers::delete_by_id(id).exec(db).await
    }

    pub async fn exists(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
        Ok(Developers::find_by_id(id).count(db).await? > 0)
    }

    /// Checks for another developer registered under the same name.
    pub async fn exists_by_name(db: &DatabaseConnection, name: &str) -> Result<bool, DbErr> {
        Ok(Developers::find()
            .filter(developers::Column::Name.eq(name))
            .count(db)
            .await?
            > 0)
    }
}
