//! User repository: generic CRUD plus login lookups.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use cars_core::domain::User;
use cars_core::error::RepoError;
use cars_core::ports::UserRepository;

use super::base_repo::SeaOrmRepository;
use super::entity::user::{self, Entity as UserEntity};

/// SeaORM user repository.
pub type SeaOrmUserRepository = SeaOrmRepository<UserEntity, User>;

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_by_like_login(&self, key: &str) -> Result<Vec<User>, RepoError> {
        tracing::debug!(%key, "Finding users by login substring");
        let pattern = format!("%{key}%");

        let models = self
            .uow
            .run("user.find_by_like_login", move |txn| {
                Box::pin(async move {
                    UserEntity::find()
                        .filter(user::Column::Login.like(pattern))
                        .order_by_asc(user::Column::Id)
                        .all(txn)
                        .await
                })
            })
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(%login, "Finding user by login");
        let login = login.to_owned();

        let result = self
            .uow
            .run("user.find_by_login", move |txn| {
                Box::pin(async move {
                    UserEntity::find()
                        .filter(user::Column::Login.eq(login))
                        .one(txn)
                        .await
                })
            })
            .await?;

        Ok(result.map(Into::into))
    }
}
