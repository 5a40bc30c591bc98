//! Review entity.
//!
//! One row per (user, videogame) pair, enforced by a unique index.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub rating: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub comment: Option<String>,

    pub user_id: i32,
    pub videogame_id: i32,

    pub created_at: Option<i32>,
    pub updated_at: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Users,
    #[sea_orm(
        belongs_to = "super::videogames::Entity",
        from = "Column::VideogameId",
        to = "super::videogames::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Videogames,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::videogames::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Videogames.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
