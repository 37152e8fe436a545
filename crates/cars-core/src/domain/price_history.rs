use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Post;

/// Price change of a listing, owning the posts published under it.
///
/// Deleting a price history deletes its posts as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceHistory {
    pub id: i64,
    pub before: i64,
    pub after: i64,
    pub created: DateTime<Utc>,
    pub posts: Vec<Post>,
}

impl PriceHistory {
    /// Create a new price history stamped with the current time.
    pub fn new(before: i64, after: i64) -> Self {
        Self {
            id: 0,
            before,
            after,
            created: Utc::now(),
            posts: Vec::new(),
        }
    }

    /// Attach a post to be persisted together with this history.
    pub fn with_post(mut self, post: Post) -> Self {
        self.posts.push(post);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_history_defaults_created_to_now() {
        let before = Utc::now();
        let history = PriceHistory::new(100, 90);
        let after = Utc::now();

        assert_eq!(history.id, 0);
        assert!(history.created >= before && history.created <= after);
        assert!(history.posts.is_empty());
    }

    #[test]
    fn test_with_post_appends() {
        let history = PriceHistory::new(100, 90)
            .with_post(Post::new(1, "sedan"))
            .with_post(Post::new(1, "hatchback"));

        let descriptions: Vec<_> = history.posts.iter().map(|p| p.description.as_str()).collect();
        assert_eq!(descriptions, ["sedan", "hatchback"]);
    }
}
