use crate::errors::Result;
use crate::users::users_model::{Credentials, NewUser, User};
use async_trait::async_trait;

/// Trait for user repository operations
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    /// Fails with `ConstraintViolation` when the username is taken.
    async fn create(&self, new_user: NewUser) -> Result<User>;
    fn find_by_username(&self, username: &str) -> Result<Option<User>>;
    fn get_by_id(&self, user_id: i64) -> Result<User>;
}

/// Trait for user service operations
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn register(&self, credentials: Credentials) -> Result<User>;
    fn login(&self, credentials: Credentials) -> Result<User>;
    fn get_user(&self, user_id: i64) -> Result<User>;
}
