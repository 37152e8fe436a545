//! User entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "auto_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub login: String,
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain User.
impl From<Model> for cars_core::domain::User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            login: model.login,
            password: model.password,
        }
    }
}

/// Conversion from Domain User to SeaORM ActiveModel.
impl From<cars_core::domain::User> for ActiveModel {
    fn from(user: cars_core::domain::User) -> Self {
        Self {
            id: Set(user.id),
            login: Set(user.login),
            password: Set(user.password),
        }
    }
}
