//! Database access: connections, schema, unit of work and repositories.

mod base_repo;
mod connections;
mod error;
mod post_repo;
mod price_history_repo;
mod unit_of_work;
mod user_repo;

pub mod entity;
pub mod schema;

pub use base_repo::SeaOrmRepository;
pub use connections::{DatabaseConfig, connect};
pub use post_repo::SeaOrmPostRepository;
pub use price_history_repo::SeaOrmPriceHistoryRepository;
pub use unit_of_work::UnitOfWork;
pub use user_repo::SeaOrmUserRepository;

#[cfg(test)]
mod tests;
