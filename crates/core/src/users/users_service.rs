use std::sync::Arc;

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use async_trait::async_trait;
use log::{debug, info};
use rand::rngs::OsRng;

use super::users_model::{Credentials, NewUser, User};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::errors::{Error, Result, ValidationError};

pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        UserService { repository }
    }

    fn hash_password(password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| Error::Unexpected(format!("Failed to hash password: {}", e)))
    }

    fn verify_password(password: &str, password_hash: &str) -> bool {
        match PasswordHash::new(password_hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn register(&self, credentials: Credentials) -> Result<User> {
        let username = credentials.username.trim().to_string();
        if username.is_empty() {
            return Err(ValidationError::MissingField("username".to_string()).into());
        }
        if credentials.password.is_empty() {
            return Err(ValidationError::MissingField("password".to_string()).into());
        }

        let password_hash = Self::hash_password(&credentials.password)?;
        let user = self
            .repository
            .create(NewUser {
                username,
                password_hash,
            })
            .await?;
        info!("Registered user {} ({})", user.id, user.username);
        Ok(user)
    }

    fn login(&self, credentials: Credentials) -> Result<User> {
        let user = self
            .repository
            .find_by_username(credentials.username.trim())?
            .ok_or(Error::InvalidCredentials)?;

        if !Self::verify_password(&credentials.password, &user.password_hash) {
            debug!("Rejected login for '{}'", user.username);
            return Err(Error::InvalidCredentials);
        }
        Ok(user)
    }

    fn get_user(&self, user_id: i64) -> Result<User> {
        self.repository.get_by_id(user_id)
    }
}
