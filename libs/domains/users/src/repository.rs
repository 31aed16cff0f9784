use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{NewUser, User};

/// Repository trait for User persistence
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert an active user; `UserError::DuplicateUsername` if the name is taken
    async fn create(&self, user: NewUser) -> UserResult<User>;

    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>>;

    /// Exact, case-sensitive match
    async fn get_by_username(&self, username: &str) -> UserResult<Option<User>>;

    async fn set_active(&self, id: i64, is_active: bool) -> UserResult<bool>;
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<i64, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> UserResult<User> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.username == user.username) {
            return Err(UserError::DuplicateUsername(user.username));
        }

        let id = users.keys().max().copied().unwrap_or(0) + 1;
        let user = User {
            id,
            username: user.username,
            password_hash: user.password_hash,
            is_active: true,
            date_joined: Utc::now(),
        };
        users.insert(id, user.clone());

        tracing::info!(user_id = id, username = %user.username, "Created user");
        Ok(user)
    }

    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn get_by_username(&self, username: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn set_active(&self, id: i64, is_active: bool) -> UserResult<bool> {
        let mut users = self.users.write().await;
        match users.get_mut(&id) {
            Some(user) => {
                user.is_active = is_active;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            password_hash: "hashed_password".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_user() {
        let repo = InMemoryUserRepository::new();

        let created = repo.create(new_user("alice")).await.unwrap();
        assert!(created.is_active);

        let fetched = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched.unwrap().username, "alice");
    }

    #[tokio::test]
    async fn test_username_lookup_is_exact() {
        let repo = InMemoryUserRepository::new();
        repo.create(new_user("alice")).await.unwrap();

        assert!(repo.get_by_username("alice").await.unwrap().is_some());
        assert!(repo.get_by_username("ALICE").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_error() {
        let repo = InMemoryUserRepository::new();
        repo.create(new_user("alice")).await.unwrap();

        let result = repo.create(new_user("alice")).await;
        assert!(matches!(result, Err(UserError::DuplicateUsername(_))));
    }

    #[tokio::test]
    async fn test_set_active() {
        let repo = InMemoryUserRepository::new();
        let user = repo.create(new_user("bob")).await.unwrap();

        assert!(repo.set_active(user.id, false).await.unwrap());
        assert!(!repo.get_by_id(user.id).await.unwrap().unwrap().is_active);
        assert!(!repo.set_active(999, false).await.unwrap());
    }
}
