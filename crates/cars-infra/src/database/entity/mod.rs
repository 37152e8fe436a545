//! SeaORM entity definitions: the table and column mapping of the domain.

pub mod post;
pub mod price_history;
pub mod user;
