//! Unit tests for the user service.

use super::*;
use crate::errors::{Error, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct MockUserRepository {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepositoryTrait for MockUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == new_user.username) {
            return Err(Error::ConstraintViolation(format!(
                "Username '{}' already exists",
                new_user.username
            )));
        }
        let user = User {
            id: users.len() as i64 + 1,
            username: new_user.username,
            password_hash: new_user.password_hash,
            created_at: Utc::now().naive_utc(),
        };
        users.push(user.clone());
        Ok(user)
    }

    fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    fn get_by_id(&self, user_id: i64) -> Result<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("User {} not found", user_id)))
    }
}

fn credentials(username: &str, password: &str) -> Credentials {
    Credentials {
        username: username.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_register_hashes_password() {
    let service = UserService::new(Arc::new(MockUserRepository::default()));

    let user = service.register(credentials(" alice ", "s3cret")).await.unwrap();

    assert_eq!(user.username, "alice");
    assert_ne!(user.password_hash, "s3cret");
    assert!(user.password_hash.starts_with("$argon2"));
}

#[tokio::test]
async fn test_register_rejects_duplicates_and_blank_fields() {
    let service = UserService::new(Arc::new(MockUserRepository::default()));
    service.register(credentials("alice", "pw")).await.unwrap();

    let err = service.register(credentials("alice", "other")).await.unwrap_err();
    assert!(matches!(err, Error::ConstraintViolation(_)));

    assert!(service.register(credentials("  ", "pw")).await.unwrap_err().is_validation());
    assert!(service.register(credentials("bob", "")).await.unwrap_err().is_validation());
}

#[tokio::test]
async fn test_login_checks_password() {
    let service = UserService::new(Arc::new(MockUserRepository::default()));
    let registered = service.register(credentials("alice", "pw")).await.unwrap();

    let user = service.login(credentials("alice", "pw")).unwrap();
    assert_eq!(user.id, registered.id);

    assert!(matches!(
        service.login(credentials("alice", "wrong")).unwrap_err(),
        Error::InvalidCredentials
    ));
    assert!(matches!(
        service.login(credentials("nobody", "pw")).unwrap_err(),
        Error::InvalidCredentials
    ));
}

#[test]
fn test_user_serialization_hides_password_hash() {
    let user = User {
        id: 1,
        username: "alice".to_string(),
        password_hash: "$argon2id$secret".to_string(),
        created_at: Utc::now().naive_utc(),
    };

    let json = serde_json::to_value(&user).unwrap();
    assert!(json.get("passwordHash").is_none());
    assert_eq!(json["username"], "alice");
}
