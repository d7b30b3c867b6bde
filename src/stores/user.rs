//! Defines the user store trait and an implementation for the SQLite backend.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    db::{CreateTable, MapRow},
    error::Error,
    password::PasswordHash,
    user::{User, UserId},
};

/// Handles the creation and retrieval of [User] records.
pub trait UserStore {
    /// Create a new user.
    ///
    /// Returns [Error::DuplicateEmail] if the email is already registered.
    fn create(&self, name: &str, email: &str, password_hash: PasswordHash) -> Result<User, Error>;

    /// Get a user by their email.
    ///
    /// Returns [Error::NotFound] if no user with the given email exists.
    fn get_by_email(&self, email: &str) -> Result<User, Error>;
}

/// Handles the creation and retrieval of [User] records in SQLite.
#[derive(Debug, Clone)]
pub struct SqliteUserStore {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteUserStore {
    /// Create a new user store.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl UserStore for SqliteUserStore {
    /// Create and insert a new user into the database.
    ///
    /// # Panics
    ///
    /// Panics if the lock for the database connection is already held by the same thread.
    ///
    /// # Errors
    ///
    /// Returns [Error::DuplicateEmail] if `email` is already registered, or
    /// [Error::SqlError] if an SQL related error occurred.
    fn create(&self, name: &str, email: &str, password_hash: PasswordHash) -> Result<User, Error> {
        let connection = self.connection.lock().unwrap();

        connection.execute(
            "INSERT INTO user (name, email, password) VALUES (?1, ?2, ?3)",
            (name, email, password_hash.to_string()),
        )?;

        let id = UserId::new(connection.last_insert_rowid());

        Ok(User::new(
            id,
            name.to_string(),
            email.to_string(),
            password_hash,
        ))
    }

    /// Get the user with the specified `email` address, or return
    /// [Error::NotFound] if no such user exists.
    ///
    /// # Panics
    ///
    /// Panics if the lock for the database connection is already held by the same thread.
    fn get_by_email(&self, email: &str) -> Result<User, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare("SELECT id, name, email, password FROM user WHERE email = :email")?
            .query_row(&[(":email", email)], SqliteUserStore::map_row)
            .map_err(|error| error.into())
    }
}

impl CreateTable for SqliteUserStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE user (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL,
                    email TEXT UNIQUE NOT NULL,
                    password TEXT NOT NULL
                    )",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SqliteUserStore {
    type ReturnType = User;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        let raw_id = row.get(offset)?;
        let name = row.get(offset + 1)?;
        let email = row.get(offset + 2)?;
        let raw_password_hash: String = row.get(offset + 3)?;

        let id = UserId::new(raw_id);
        let password_hash = PasswordHash::new_unchecked(&raw_password_hash);

        Ok(User::new(id, name, email, password_hash))
    }
}

#[cfg(test)]
mod user_store_tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;

    use crate::{db::CreateTable, error::Error, password::PasswordHash};

    use super::{SqliteUserStore, UserStore};

    fn get_store() -> SqliteUserStore {
        let connection = Connection::open_in_memory().unwrap();
        SqliteUserStore::create_table(&connection).unwrap();

        SqliteUserStore::new(Arc::new(Mutex::new(connection)))
    }

    #[test]
    fn insert_user_succeeds() {
        let store = get_store();

        let password_hash = PasswordHash::new_unchecked("hunter2");

        let inserted_user = store
            .create("Jane", "hello@world.com", password_hash.clone())
            .unwrap();

        assert!(inserted_user.id().as_i64() > 0);
        assert_eq!(inserted_user.name(), "Jane");
        assert_eq!(inserted_user.email(), "hello@world.com");
        assert_eq!(inserted_user.password_hash(), &password_hash);
    }

    #[test]
    fn insert_user_fails_on_duplicate_email() {
        let store = get_store();

        assert!(
            store
                .create("Jane", "hello@world.com", PasswordHash::new_unchecked("hunter2"))
                .is_ok()
        );

        assert_eq!(
            store.create(
                "Janet",
                "hello@world.com",
                PasswordHash::new_unchecked("hunter3")
            ),
            Err(Error::DuplicateEmail)
        );
    }

    #[test]
    fn get_user_fails_with_non_existent_email() {
        let store = get_store();

        // This email is not in the database.
        assert_eq!(
            store.get_by_email("notavalidemail@foo.bar"),
            Err(Error::NotFound)
        );
    }

    #[test]
    fn get_user_succeeds_with_existing_email() {
        let store = get_store();

        let test_user = store
            .create("Jane", "foo@bar.baz", PasswordHash::new_unchecked("hunter2"))
            .unwrap();

        let retrieved_user = store.get_by_email(test_user.email()).unwrap();

        assert_eq!(retrieved_user, test_user);
    }
}
