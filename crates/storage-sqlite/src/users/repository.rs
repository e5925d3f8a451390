use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;
use std::sync::Arc;

use budgetbook_core::errors::Error;
use budgetbook_core::users::{NewUser, User, UserRepositoryTrait};
use budgetbook_core::Result;

use super::model::{NewUserDB, UserDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::users;

pub struct UserRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        UserRepository { pool, writer }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let taken = users::table
                    .filter(users::username.eq(&new_user.username))
                    .select(users::id)
                    .first::<i64>(conn)
                    .optional()
                    .map_err(StorageError::from)?;
                if taken.is_some() {
                    return Err(Error::ConstraintViolation(format!(
                        "Username '{}' is already taken",
                        new_user.username
                    )));
                }

                let result_db = diesel::insert_into(users::table)
                    .values(NewUserDB::from(new_user))
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(User::from(result_db))
            })
            .await
    }

    fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        debug!("Looking up user '{}'", username);
        let mut conn = get_connection(&self.pool)?;
        let user_db = users::table
            .filter(users::username.eq(username))
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(user_db.map(User::from))
    }

    fn get_by_id(&self, user_id: i64) -> Result<User> {
        let mut conn = get_connection(&self.pool)?;
        users::table
            .find(user_id)
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .map(User::from)
            .ok_or_else(|| Error::NotFound(format!("User {} not found", user_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::setup;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            password_hash: "$argon2id$placeholder".to_string(),
        }
    }

    #[tokio::test]
    async fn creates_and_finds_a_user() {
        let db = setup();
        let repo = UserRepository::new(db.pool.clone(), db.writer.clone());

        let created = repo.create(new_user("alice")).await.unwrap();
        assert!(created.id > 0);

        let found = repo.find_by_username("alice").unwrap().unwrap();
        assert_eq!(found, created);
        assert_eq!(repo.get_by_id(created.id).unwrap().username, "alice");
    }

    #[tokio::test]
    async fn duplicate_username_is_a_constraint_violation() {
        let db = setup();
        let repo = UserRepository::new(db.pool.clone(), db.writer.clone());

        repo.create(new_user("alice")).await.unwrap();
        let err = repo.create(new_user("alice")).await.unwrap_err();
        assert!(matches!(err, Error::ConstraintViolation(_)));
    }

    #[tokio::test]
    async fn unknown_user_lookups() {
        let db = setup();
        let repo = UserRepository::new(db.pool.clone(), db.writer.clone());

        assert!(repo.find_by_username("nobody").unwrap().is_none());
        assert!(matches!(repo.get_by_id(42), Err(Error::NotFound(_))));
    }
}
