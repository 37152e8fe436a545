//! # Cars Infrastructure
//!
//! SeaORM implementations of the repository ports defined in `cars-core`.
//!
//! Every repository call runs as one unit of work: a transaction is opened
//! on the shared connection pool, the statements execute, and the
//! transaction commits or rolls back before the call returns.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL driver
//! - `sqlite` - SQLite driver

pub mod database;
pub mod telemetry;

pub use database::{
    DatabaseConfig, SeaOrmPostRepository, SeaOrmPriceHistoryRepository, SeaOrmUserRepository,
    UnitOfWork, connect,
};
pub use telemetry::{TelemetryConfig, init_telemetry};
