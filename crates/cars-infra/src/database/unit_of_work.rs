//! Unit of Work: one transaction per repository call.
//!
//! `run` begins a transaction on the shared pool, hands it to the work
//! closure and then either commits (on `Ok`) or rolls back (on `Err`).
//! The transaction is owned by `run`, so it is released on every exit
//! path; an uncommitted transaction that is dropped rolls back.

use std::sync::Arc;

use futures::future::BoxFuture;
use sea_orm::{DatabaseTransaction, DbConn, DbErr, TransactionTrait};

use cars_core::error::RepoError;

use super::error::map_db_err;

/// Scoped transaction runner over the process-wide connection pool.
pub struct UnitOfWork {
    db: Arc<DbConn>,
}

impl UnitOfWork {
    pub fn new(db: Arc<DbConn>) -> Self {
        Self { db }
    }

    /// Execute `work` inside a fresh transaction.
    ///
    /// The original failure is returned after rollback; a failing rollback
    /// is only logged.
    pub async fn run<T, F>(&self, operation: &'static str, work: F) -> Result<T, RepoError>
    where
        T: Send,
        F: for<'t> FnOnce(&'t DatabaseTransaction) -> BoxFuture<'t, Result<T, DbErr>> + Send,
    {
        let txn = self.db.begin().await.map_err(map_db_err)?;
        tracing::trace!(operation, "Transaction started");

        let outcome = work(&txn).await;
        match outcome {
            Ok(value) => {
                txn.commit().await.map_err(map_db_err)?;
                tracing::debug!(operation, "Transaction committed");
                Ok(value)
            }
            Err(err) => {
                tracing::warn!(operation, error = %err, "Rolling back transaction");
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!(operation, error = %rollback_err, "Transaction rollback failed");
                }
                Err(map_db_err(err))
            }
        }
    }
}
