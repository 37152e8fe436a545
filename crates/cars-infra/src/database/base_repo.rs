use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel,
    Iterable, PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder,
};

use cars_core::error::RepoError;
use cars_core::ports::BaseRepository;

use super::unit_of_work::UnitOfWork;

/// Generic SeaORM repository mapping entity `E` to domain type `T`.
///
/// Every call runs as its own unit of work.
pub struct SeaOrmRepository<E, T>
where
    E: EntityTrait,
{
    pub(crate) uow: UnitOfWork,
    _entity: PhantomData<fn() -> (E, T)>,
}

impl<E, T> SeaOrmRepository<E, T>
where
    E: EntityTrait,
{
    pub fn new(db: Arc<DbConn>) -> Self {
        Self {
            uow: UnitOfWork::new(db),
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E, T, ID> BaseRepository<T, ID> for SeaOrmRepository<E, T>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync + 'static,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = ID>,
    ID: Send + Sync + Into<sea_orm::Value> + Clone + Copy + std::fmt::Debug + 'static,
    T: From<E::Model> + Into<E::ActiveModel> + Send + Sync + 'static,
{
    async fn create(&self, entity: T) -> Result<T, RepoError> {
        let mut active_model: E::ActiveModel = entity.into();
        // The store assigns the identity.
        for key in <E::PrimaryKey as Iterable>::iter() {
            active_model.not_set(key.into_column());
        }

        let model = self
            .uow
            .run("create", move |txn| {
                Box::pin(async move { active_model.insert(txn).await })
            })
            .await?;

        Ok(model.into())
    }

    async fn update(&self, entity: T) -> Result<(), RepoError> {
        let active_model: E::ActiveModel = entity.into();

        self.uow
            .run("update", move |txn| {
                Box::pin(async move { active_model.update(txn).await.map(|_| ()) })
            })
            .await
    }

    async fn delete(&self, id: ID) -> Result<(), RepoError> {
        self.uow
            .run("delete", move |txn| {
                Box::pin(async move {
                    let result = E::delete_by_id(id).exec(txn).await?;
                    if result.rows_affected == 0 {
                        return Err(DbErr::RecordNotFound(format!(
                            "{} with id {id:?}",
                            E::default().table_name()
                        )));
                    }
                    Ok(())
                })
            })
            .await
    }

    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError> {
        let result = self
            .uow
            .run("find_by_id", move |txn| {
                Box::pin(async move { E::find_by_id(id).one(txn).await })
            })
            .await?;

        Ok(result.map(Into::into))
    }

    async fn find_all_order_by_id(&self) -> Result<Vec<T>, RepoError> {
        let models = self
            .uow
            .run("find_all_order_by_id", |txn| {
                Box::pin(async move {
                    let mut query = E::find();
                    for key in <E::PrimaryKey as Iterable>::iter() {
                        query = query.order_by_asc(key.into_column());
                    }
                    query.all(txn).await
                })
            })
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
