use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::User;

/// Data access for users
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user; fails with `DuplicateId` when the id is taken
    async fn create(&self, user: User) -> UserResult<User>;

    async fn get_by_id(&self, id: &str) -> UserResult<Option<User>>;

    /// Exact, case-sensitive email match
    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// All users in insertion order
    async fn list(&self) -> UserResult<Vec<User>>;

    /// Replace the stored record with `user`; the last write wins
    async fn replace(&self, user: User) -> UserResult<User>;
}

/// In-memory user store, used for tests and local development
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> UserResult<User> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.id == user.id) {
            return Err(UserError::DuplicateId(user.id));
        }

        users.push(user.clone());
        tracing::info!(user_id = %user.id, "Created user");
        Ok(user)
    }

    async fn get_by_id(&self, id: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn list(&self) -> UserResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn replace(&self, user: User) -> UserResult<User> {
        let mut users = self.users.write().await;
        let slot = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| UserError::NotFound(user.id.clone()))?;

        *slot = user.clone();
        Ok(user)
    }
}
