use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, ConnectionTrait, DbErr};
use serde::{Deserialize, Serialize};
use shutter_core::DBDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub username: String,
    pub admin: bool,
    pub created_at: DBDateTime,
    pub updated_at: DBDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_albums::Entity")]
    UserAlbums,
    #[sea_orm(has_many = "super::user_media_data::Entity")]
    UserMediaData,
}

impl Related<super::user_albums::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserAlbums.def()
    }
}

impl Related<super::user_media_data::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserMediaData.def()
    }
}

/// Albums the user owns or has been granted, through `user_albums`
impl Related<super::albums::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_albums::Relation::Album.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_albums::Relation::User.def().rev())
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = chrono::Utc::now();

        if insert {
            if self.created_at.is_not_set() {
                self.created_at = Set(now);
            }
            if self.updated_at.is_not_set() {
                self.updated_at = Set(now);
            }
        } else {
            self.updated_at = Set(now);
        }

        Ok(self)
    }
}
