use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use super::domain::{CreateUserInput, UpdateUserInput, User};
use super::errors::UserError;
use super::repository::UserRepository;

/// User business service independent of web framework
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Vec<User> {
        self.repo.list().await
    }

    pub async fn get(&self, id: u64) -> Result<User, UserError> {
        self.repo.get(id).await.ok_or(UserError::NotFound)
    }

    /// Validate and append a new user.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::users::{UserService, CreateUserInput, repo::InMemoryUserRepository};
    /// let svc = UserService::new(Arc::new(InMemoryUserRepository::seeded()));
    /// let rt = tokio::runtime::Runtime::new().unwrap();
    /// let user = rt.block_on(svc.create(CreateUserInput::new("Test User", "test@example.com"))).unwrap();
    /// assert_eq!(user.id, 3);
    /// ```
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateUserInput) -> Result<User, UserError> {
        let (name, email) = input
            .required_fields()
            .ok_or_else(|| UserError::Validation("name or email missing".into()))?;
        let user = self.repo.insert(name, email).await?;
        info!(user_id = user.id, email = %user.email, "user_created");
        Ok(user)
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: u64, input: UpdateUserInput) -> Result<User, UserError> {
        let user = self.repo.update(id, input).await?;
        info!(user_id = user.id, "user_updated");
        Ok(user)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: u64) -> Result<User, UserError> {
        match self.repo.remove(id).await {
            Ok(user) => {
                info!(user_id = user.id, "user_deleted");
                Ok(user)
            }
            Err(UserError::NotFound) => {
                debug!(user_id = id, "delete target missing");
                Err(UserError::NotFound)
            }
            Err(e) => {
                warn!(user_id = id, code = e.code(), detail = e.detail().unwrap_or_default(), "delete left collection inconsistent");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::repo::InMemoryUserRepository;

    fn service() -> UserService {
        UserService::new(Arc::new(InMemoryUserRepository::seeded()))
    }

    #[tokio::test]
    async fn create_rejects_missing_fields() {
        let svc = service();
        let only_name = CreateUserInput { name: Some("Test User".into()), email: None };
        assert!(matches!(svc.create(only_name).await, Err(UserError::Validation(_))));
        assert!(matches!(svc.create(CreateUserInput::new("", "")).await, Err(UserError::Validation(_))));
        assert_eq!(svc.list().await.len(), 2);
    }

    #[tokio::test]
    async fn crud_round_trip() -> Result<(), anyhow::Error> {
        let svc = service();
        let created = svc.create(CreateUserInput::new("Test User", "test@example.com")).await?;
        assert_eq!(created, User { id: 3, name: "Test User".into(), email: "test@example.com".into() });
        assert_eq!(svc.get(3).await?, created);

        let updated = svc
            .update(3, UpdateUserInput { name: None, email: Some("updated@example.com".into()) })
            .await?;
        assert_eq!(updated.name, "Test User");
        assert_eq!(updated.email, "updated@example.com");

        let removed = svc.delete(3).await?;
        assert_eq!(removed, updated);
        assert_eq!(svc.get(3).await, Err(UserError::NotFound));
        Ok(())
    }

    #[tokio::test]
    async fn get_is_stable_until_mutation() -> Result<(), anyhow::Error> {
        let svc = service();
        let a = svc.get(1).await?;
        let b = svc.get(1).await?;
        assert_eq!(a, b);
        svc.update(1, UpdateUserInput { name: Some("Changed".into()), email: None }).await?;
        assert_ne!(svc.get(1).await?, a);
        Ok(())
    }
}
