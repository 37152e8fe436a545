//! Table definitions derived from the SeaORM entities.

use sea_orm::{ConnectionTrait, DbConn, DbErr, EntityTrait, Schema};

use super::entity::{post, price_history, user};

/// Create `auto_user`, `PRICE_HISTORY` and `auto_post` if they do not exist.
///
/// Tables are created in foreign-key order.
pub async fn create_tables(db: &DbConn) -> Result<(), DbErr> {
    create_table(db, user::Entity).await?;
    create_table(db, price_history::Entity).await?;
    create_table(db, post::Entity).await?;
    Ok(())
}

async fn create_table<E: EntityTrait>(db: &DbConn, entity: E) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let mut statement = Schema::new(backend).create_table_from_entity(entity);
    statement.if_not_exists();

    db.execute(backend.build(&statement)).await?;
    tracing::debug!(table = entity.table_name(), "Table ensured");
    Ok(())
}
