//! Classification of SeaORM failures into repository errors.

use sea_orm::{DbErr, SqlErr};

use cars_core::error::RepoError;

/// Map a store failure to [`RepoError`], keeping the store's message.
pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg))
        | Some(SqlErr::ForeignKeyConstraintViolation(msg)) => return RepoError::Constraint(msg),
        _ => {}
    }

    match &err {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepoError::NotFound,
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
        _ => RepoError::Query(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_rows_map_to_not_found() {
        assert!(matches!(
            map_db_err(DbErr::RecordNotUpdated),
            RepoError::NotFound
        ));
        assert!(matches!(
            map_db_err(DbErr::RecordNotFound("auto_user".into())),
            RepoError::NotFound
        ));
    }

    #[test]
    fn test_other_failures_keep_store_message() {
        match map_db_err(DbErr::Custom("relation does not exist".into())) {
            RepoError::Query(msg) => assert!(msg.contains("relation does not exist")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
