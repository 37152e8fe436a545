use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - an ad published by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub description: String,
    pub created: DateTime<Utc>,
    /// Owning user.
    pub user_id: i32,
    /// Price history this post belongs to, if any.
    pub price_history_id: Option<i64>,
}

impl Post {
    /// Create a new, not yet persisted post.
    pub fn new(user_id: i32, description: impl Into<String>) -> Self {
        Self {
            id: 0,
            description: description.into(),
            created: Utc::now(),
            user_id,
            price_history_id: None,
        }
    }
}
