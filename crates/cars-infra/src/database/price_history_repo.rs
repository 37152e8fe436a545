//! Price history repository.
//!
//! A price history owns its posts. The store does not cascade; this
//! repository saves, loads and deletes the posts together with the history
//! inside the same unit of work.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, DbConn, DbErr, EntityTrait, NotSet,
    QueryFilter, QueryOrder,
};

use cars_core::domain::{Post, PriceHistory};
use cars_core::error::RepoError;
use cars_core::ports::{BaseRepository, PriceHistoryRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::price_history::{self, Entity as PriceHistoryEntity};
use super::unit_of_work::UnitOfWork;

/// SeaORM price history repository.
pub struct SeaOrmPriceHistoryRepository {
    uow: UnitOfWork,
}

impl SeaOrmPriceHistoryRepository {
    pub fn new(db: Arc<DbConn>) -> Self {
        Self {
            uow: UnitOfWork::new(db),
        }
    }
}

/// Persist `posts` as owned by `history_id`: new posts are inserted,
/// existing ones are updated and re-linked.
async fn save_posts(
    txn: &DatabaseTransaction,
    history_id: i64,
    posts: Vec<Post>,
) -> Result<Vec<post::Model>, DbErr> {
    let mut saved = Vec::with_capacity(posts.len());
    for post in posts {
        let is_new = post.id == 0;
        let mut active_model: post::ActiveModel = Post {
            price_history_id: Some(history_id),
            ..post
        }
        .into();

        let model = if is_new {
            active_model.id = NotSet;
            active_model.insert(txn).await?
        } else {
            active_model.update(txn).await?
        };
        saved.push(model);
    }
    Ok(saved)
}

/// Detach posts linked to `history_id` that are not in `kept`.
async fn release_dropped_posts(
    txn: &DatabaseTransaction,
    history_id: i64,
    kept: Vec<i32>,
) -> Result<u64, DbErr> {
    let result = PostEntity::update_many()
        .col_expr(
            post::Column::PriceHistoryId,
            Expr::value(Option::<i64>::None),
        )
        .filter(post::Column::PriceHistoryId.eq(history_id))
        .filter(post::Column::Id.is_not_in(kept))
        .exec(txn)
        .await?;
    Ok(result.rows_affected)
}

#[async_trait]
impl BaseRepository<PriceHistory, i64> for SeaOrmPriceHistoryRepository {
    async fn create(&self, history: PriceHistory) -> Result<PriceHistory, RepoError> {
        let mut active_model = price_history::ActiveModel::from(&history);
        active_model.id = NotSet;
        let posts = history.posts;

        self.uow
            .run("price_history.create", move |txn| {
                Box::pin(async move {
                    let model = active_model.insert(txn).await?;
                    let posts = save_posts(txn, model.id, posts).await?;
                    Ok(model.into_domain(posts))
                })
            })
            .await
    }

    async fn update(&self, history: PriceHistory) -> Result<(), RepoError> {
        let active_model = price_history::ActiveModel::from(&history);
        let id = history.id;
        let posts = history.posts;
        let kept: Vec<i32> = posts.iter().map(|p| p.id).filter(|&id| id != 0).collect();

        self.uow
            .run("price_history.update", move |txn| {
                Box::pin(async move {
                    active_model.update(txn).await?;
                    let released = release_dropped_posts(txn, id, kept).await?;
                    if released > 0 {
                        tracing::debug!(price_history_id = id, released, "Detached dropped posts");
                    }
                    save_posts(txn, id, posts).await?;
                    Ok(())
                })
            })
            .await
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        self.uow
            .run("price_history.delete", move |txn| {
                Box::pin(async move {
                    let removed = PostEntity::delete_many()
                        .filter(post::Column::PriceHistoryId.eq(id))
                        .exec(txn)
                        .await?;

                    let result = PriceHistoryEntity::delete_by_id(id).exec(txn).await?;
                    if result.rows_affected == 0 {
                        return Err(DbErr::RecordNotFound(format!(
                            "PRICE_HISTORY with id {id}"
                        )));
                    }

                    tracing::debug!(
                        price_history_id = id,
                        removed_posts = removed.rows_affected,
                        "Deleted price history with its posts"
                    );
                    Ok(())
                })
            })
            .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<PriceHistory>, RepoError> {
        let found = self
            .uow
            .run("price_history.find_by_id", move |txn| {
                Box::pin(async move {
                    PriceHistoryEntity::find_by_id(id)
                        .find_with_related(PostEntity)
                        .order_by_asc(post::Column::Id)
                        .all(txn)
                        .await
                })
            })
            .await?;

        Ok(found
            .into_iter()
            .next()
            .map(|(history, posts)| history.into_domain(posts)))
    }

    async fn find_all_order_by_id(&self) -> Result<Vec<PriceHistory>, RepoError> {
        let found = self
            .uow
            .run("price_history.find_all_order_by_id", |txn| {
                Box::pin(async move {
                    PriceHistoryEntity::find()
                        .order_by_asc(price_history::Column::Id)
                        .find_with_related(PostEntity)
                        .order_by_asc(post::Column::Id)
                        .all(txn)
                        .await
                })
            })
            .await?;

        Ok(found
            .into_iter()
            .map(|(history, posts)| history.into_domain(posts))
            .collect())
    }
}

#[async_trait]
impl PriceHistoryRepository for SeaOrmPriceHistoryRepository {
    async fn find_by_post_id(&self, post_id: i32) -> Result<Option<PriceHistory>, RepoError> {
        let found = self
            .uow
            .run("price_history.find_by_post_id", move |txn| {
                Box::pin(async move {
                    let Some(owned) = PostEntity::find_by_id(post_id).one(txn).await? else {
                        return Ok(None);
                    };
                    let Some(history_id) = owned.price_history_id else {
                        return Ok(None);
                    };

                    let found = PriceHistoryEntity::find_by_id(history_id)
                        .find_with_related(PostEntity)
                        .order_by_asc(post::Column::Id)
                        .all(txn)
                        .await?;
                    Ok(found.into_iter().next())
                })
            })
            .await?;

        Ok(found.map(|(history, posts)| history.into_domain(posts)))
    }
}
