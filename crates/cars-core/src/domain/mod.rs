//! Domain entities - the core business objects.

mod post;
mod price_history;
mod user;

pub use post::Post;
pub use price_history::PriceHistory;
pub use user::User;
