//! Price history entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use cars_core::domain::{Post, PriceHistory};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "PRICE_HISTORY")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub before: i64,
    pub after: i64,
    pub created: DateTimeUtc,
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

impl Model {
    /// Assemble the domain aggregate from the row and its owned posts.
    pub fn into_domain(self, posts: Vec<super::post::Model>) -> PriceHistory {
        PriceHistory {
            id: self.id,
            before: self.before,
            after: self.after,
            created: self.created,
            posts: posts.into_iter().map(Post::from).collect(),
        }
    }
}

/// Conversion from Domain PriceHistory to SeaORM ActiveModel.
///
/// Only the history row; owned posts are persisted separately.
impl From<&PriceHistory> for ActiveModel {
    fn from(history: &PriceHistory) -> Self {
        Self {
            id: Set(history.id),
            before: Set(history.before),
            after: Set(history.after),
            created: Set(history.created),
        }
    }
}
