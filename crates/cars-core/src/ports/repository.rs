use async_trait::async_trait;

use crate::domain::{Post, PriceHistory, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
///
/// Every call is its own unit of work: it either commits completely or
/// rolls back and returns the store failure.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Insert a new entity and return it with its store-assigned id.
    async fn create(&self, entity: T) -> Result<T, RepoError>;

    /// Persist changes to an existing entity.
    ///
    /// Fails with [`RepoError::NotFound`] when no row has the entity's id.
    async fn update(&self, entity: T) -> Result<(), RepoError>;

    /// Delete an entity by its id without loading it first.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;

    /// Find an entity by its id.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// All entities, ascending by id.
    async fn find_all_order_by_id(&self) -> Result<Vec<T>, RepoError>;
}

/// User repository with login lookups.
#[async_trait]
pub trait UserRepository: BaseRepository<User, i32> {
    /// Users whose login contains `key`.
    async fn find_by_like_login(&self, key: &str) -> Result<Vec<User>, RepoError>;

    /// The user with exactly this login.
    async fn find_by_login(&self, login: &str) -> Result<Option<User>, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i32> {
    async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<Post>, RepoError>;
}

/// Price history repository. Posts are saved, loaded and deleted together
/// with the history that owns them.
#[async_trait]
pub trait PriceHistoryRepository: BaseRepository<PriceHistory, i64> {
    /// The history owning the given post, with all of its posts.
    async fn find_by_post_id(&self, post_id: i32) -> Result<Option<PriceHistory>, RepoError>;
}
