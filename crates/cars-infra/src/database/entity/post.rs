//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "auto_post")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub created: DateTimeUtc,
    #[sea_orm(column_name = "auto_user_id")]
    pub user_id: i32,
    #[sea_orm(column_name = "auto_post_id")]
    pub price_history_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    // Owned posts are removed by the price history repository, not by the store.
    #[sea_orm(
        belongs_to = "super::price_history::Entity",
        from = "Column::PriceHistoryId",
        to = "super::price_history::Column::Id"
    )]
    PriceHistory,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::price_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PriceHistory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for cars_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            description: model.description,
            created: model.created,
            user_id: model.user_id,
            price_history_id: model.price_history_id,
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<cars_core::domain::Post> for ActiveModel {
    fn from(post: cars_core::domain::Post) -> Self {
        Self {
            id: Set(post.id),
            description: Set(post.description),
            created: Set(post.created),
            user_id: Set(post.user_id),
            price_history_id: Set(post.price_history_id),
        }
    }
}
