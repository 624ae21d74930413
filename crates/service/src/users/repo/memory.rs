use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::users::domain::{seed_users, UpdateUserInput, User};
use crate::users::errors::UserError;
use crate::users::repository::UserRepository;

/// Process-local user collection.
///
/// Reads share the lock; every mutation, including id assignment and the
/// post-delete re-scan, runs under one write guard.
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new(users: Vec<User>) -> Self {
        Self { users: RwLock::new(users) }
    }

    /// Collection holding the two default records.
    pub fn seeded() -> Self {
        Self::new(seed_users())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    async fn get(&self, id: u64) -> Option<User> {
        let users = self.users.read().await;
        users.iter().find(|u| u.id == id).cloned()
    }

    async fn insert(&self, name: String, email: String) -> Result<User, UserError> {
        let mut users = self.users.write().await;
        // Length-based ids can repeat after deletes; kept for API compatibility.
        let user = User { id: users.len() as u64 + 1, name, email };
        users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: u64, input: UpdateUserInput) -> Result<User, UserError> {
        let mut users = self.users.write().await;
        let existing = users.iter_mut().find(|u| u.id == id).ok_or(UserError::NotFound)?;
        input.apply_to(existing);
        Ok(existing.clone())
    }

    async fn remove(&self, id: u64) -> Result<User, UserError> {
        let mut users = self.users.write().await;
        let idx = users.iter().position(|u| u.id == id).ok_or(UserError::NotFound)?;
        let removed = users.remove(idx);
        if users.iter().any(|u| u.id == id) {
            return Err(UserError::Consistency(format!("user {id} still present after delete")));
        }
        Ok(removed)
    }
}
