//! Implements a struct that holds the state of the REST server.

use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use rusqlite::Connection;

use crate::{
    db::initialize,
    error::Error,
    profile::Profile,
    stores::{SqliteTransactionStore, SqliteUserStore},
    transaction::TransactionKind,
};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The store for registered users.
    pub user_store: SqliteUserStore,

    /// The store for income records.
    pub income_store: SqliteTransactionStore,

    /// The store for expense records.
    pub expense_store: SqliteTransactionStore,

    /// The fixed profile returned by the profile endpoint.
    ///
    /// Created once at startup and never mutated afterwards.
    pub profile: Profile,

    /// Directory containing the prebuilt front-end pages.
    pub frontend_dir: PathBuf,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for
    /// the domain models. All stores share the one connection.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(
        db_connection: Connection,
        frontend_dir: impl Into<PathBuf>,
    ) -> Result<Self, Error> {
        initialize(&db_connection)?;

        let connection = Arc::new(Mutex::new(db_connection));

        Ok(Self {
            user_store: SqliteUserStore::new(connection.clone()),
            income_store: SqliteTransactionStore::new(connection.clone(), TransactionKind::Income),
            expense_store: SqliteTransactionStore::new(connection, TransactionKind::Expense),
            profile: Profile::demo(),
            frontend_dir: frontend_dir.into(),
        })
    }
}
