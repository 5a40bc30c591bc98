//! User account repository.
//!
//! Passwords are hashed by the callers; only the hash ever reaches this
//! layer.

use crate::database::dto::{CreateUserData, UpdateUserData};
use crate::entity::prelude::*;
use crate::entity::users;
use sea_orm::*;

/// User account repository.
pub struct UsersRepository;

impl UsersRepository {
    /// Inserts a user with an already-hashed password.
    pub async fn insert(
        db: &DatabaseConnection,
        user: CreateUserData,
        password_hash: String,
    ) -> Result<users::Model, DbErr> {
        let now = chrono::Utc::now().timestamp() as i32;

        let active = users::ActiveModel {
            id: NotSet,
            nick: Set(user.nick),
            email: Set(user.email),
            nif: Set(user.nif),
            password_hash: Set(password_hash),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
        };

        active.insert(db).await
    }

    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<users::Model>, DbErr> {
        Users::find().order_by_asc(users::Column::Id).all(db).await
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<users::Model>, DbErr> {
        Users::find_by_id(id).one(db).await
    }

    /// Replaces every writable column, including the password hash.
    /// Returns None when the user does not exist.
    pub async fn update_full(
        db: &DatabaseConnection,
        id: i32,
        user: CreateUserData,
        password_hash: String,
    ) -> Result<Option<users::Model>, DbErr> {
        let Some(existing) = Users::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let mut active: users::ActiveModel = existing.into();
        active.nick = Set(user.nick);
        active.email = Set(user.email);
        active.nif = Set(user.nif);
        active.password_hash = Set(password_hash);
        active.updated_at = Set(Some(chrono::Utc::now().timestamp() as i32));

        active.update(db).await.map(Some)
    }

    /// Applies only the provided fields; a new password arrives as a
    /// fresh hash. Returns None when the user does not exist.
    pub async fn update_partial(
        db: &DatabaseConnection,
        id: i32,
        updates: UpdateUserData,
        password_hash: Option<String>,
    ) -> Result<Option<users::Model>, DbErr> {
        if Users::find_by_id(id).one(db).await?.is_none() {
            return Ok(None);
        }

        let active = users::ActiveModel {
            id: Set(id),
            nick: updates.nick.map_or(NotSet, Set),
            email: updates.email.map_or(NotSet, Set),
            nif: updates.nif.map_or(NotSet, Set),
            password_hash: password_hash.map_or(NotSet, Set),
            updated_at: Set(Some(chrono::Utc::now().timestamp() as i32)),
            ..Default::default()
        };

        active.update(db).await.map(Some)
    }

    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<DeleteResult, DbErr> {
        Users::delete_by_id(id).exec(db).await
    }

    pub async fn exists(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
        Ok(Users::find_by_id(id).count(db).await? > 0)
    }
}
