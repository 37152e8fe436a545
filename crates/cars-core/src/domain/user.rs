use serde::{Deserialize, Serialize};

/// User entity - an account that publishes ads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identity, `0` until the user is persisted.
    pub id: i32,
    pub login: String,
    pub password: String,
}

impl User {
    /// Create a transient user; the store assigns the id on insert.
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: 0,
            login: login.into(),
            password: password.into(),
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_transient() {
        let user = User::new("john", "secret");
        assert_eq!(user.id, 0);
        assert_eq!(user.login, "john");
        assert!(!user.is_persisted());
    }

    #[test]
    fn test_assigned_id_marks_persisted() {
        let user = User {
            id: 42,
            ..User::new("jane", "secret")
        };
        assert!(user.is_persisted());
    }
}
