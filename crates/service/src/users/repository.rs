use async_trait::async_trait;

use super::domain::{UpdateUserInput, User};
use super::errors::UserError;

/// Storage abstraction for the user collection.
///
/// Each method is one indivisible step against the collection: implementations
/// must not let another call observe a half-applied mutation.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All records in insertion order.
    async fn list(&self) -> Vec<User>;
    async fn get(&self, id: u64) -> Option<User>;
    /// Append a record whose id is `current length + 1`.
    async fn insert(&self, name: String, email: String) -> Result<User, UserError>;
    async fn update(&self, id: u64, input: UpdateUserInput) -> Result<User, UserError>;
    /// Remove the first record with `id` and return it.
    async fn remove(&self, id: u64) -> Result<User, UserError>;
}
