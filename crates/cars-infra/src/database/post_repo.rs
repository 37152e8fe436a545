use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use cars_core::domain::Post;
use cars_core::error::RepoError;
use cars_core::ports::PostRepository;

use super::base_repo::SeaOrmRepository;
use super::entity::post::{self, Entity as PostEntity};

/// SeaORM post repository.
pub type SeaOrmPostRepository = SeaOrmRepository<PostEntity, Post>;

#[async_trait]
impl PostRepository for SeaOrmPostRepository {
    async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<Post>, RepoError> {
        let models = self
            .uow
            .run("post.find_by_user_id", move |txn| {
                Box::pin(async move {
                    PostEntity::find()
                        .filter(post::Column::UserId.eq(user_id))
                        .order_by_asc(post::Column::Id)
                        .all(txn)
                        .await
                })
            })
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
