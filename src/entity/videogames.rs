//! Videogame entity.
//!
//! The catalog core: belongs to an optional genre and developer, has
//! reviews, and is linked to owning users through `user_games`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "videogames")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub cover_url: Option<String>,

    pub genre_id: Option<i32>,
    pub developer_id: Option<i32>,

    pub created_at: Option<i32>,
    pub updated_at: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::genres::Entity",
        from = "Column::GenreId",
        to = "super::genres::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Genres,
    #[sea_orm(
        belongs_to = "super::developers::Entity",
        from = "Column::DeveloperId",
        to = "super::developers::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Developers,
    #[sea_orm(has_many = "super::reviews::Entity")]
    Reviews,
    #[sea_orm(has_many = "super::user_games::Entity")]
    UserGames,
}

impl Related<super::genres::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Genres.def()
    }
}

impl Related<super::developers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Developers.def()
    }
}

impl Related<super::reviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl Related<super::user_games::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserGames.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_games::Relation::Users.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_games::Relation::Videogames.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
