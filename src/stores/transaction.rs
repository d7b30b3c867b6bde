//! Defines the transaction store trait and an implementation for the SQLite backend.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    db::{CreateTable, MapRow},
    error::Error,
    transaction::{NewTransaction, Transaction, TransactionId, TransactionKind},
};

/// Handles the creation, retrieval, and deletion of income and expense records.
pub trait TransactionStore {
    /// Record a new transaction.
    fn create(&self, new_transaction: NewTransaction) -> Result<Transaction, Error>;

    /// Get a transaction by its ID.
    ///
    /// Returns [Error::NotFound] if no transaction with the given ID exists.
    fn get(&self, id: TransactionId) -> Result<Transaction, Error>;

    /// Get all transactions of the store's kind, most recent first.
    fn list(&self) -> Result<Vec<Transaction>, Error>;

    /// Remove a transaction by its ID.
    ///
    /// Returns [Error::NotFound] if no transaction with the given ID exists.
    fn delete(&self, id: TransactionId) -> Result<(), Error>;
}

/// Stores income or expense records in SQLite, one instance per kind.
///
/// Both kinds share a schema, so the same store type serves the `income` and
/// `expense` tables; `kind` selects which one.
#[derive(Debug, Clone)]
pub struct SqliteTransactionStore {
    connection: Arc<Mutex<Connection>>,
    kind: TransactionKind,
}

impl SqliteTransactionStore {
    /// Create a new store over `connection` for the given `kind` of transaction.
    pub fn new(connection: Arc<Mutex<Connection>>, kind: TransactionKind) -> Self {
        Self { connection, kind }
    }

    /// The kind of transaction this store manages.
    pub fn kind(&self) -> TransactionKind {
        self.kind
    }
}

impl TransactionStore for SqliteTransactionStore {
    /// Create and insert a new transaction into the database.
    ///
    /// # Panics
    ///
    /// Panics if the lock for the database connection is already held by the same thread.
    fn create(&self, new_transaction: NewTransaction) -> Result<Transaction, Error> {
        let connection = self.connection.lock().unwrap();

        connection.execute(
            &format!(
                "INSERT INTO {} (source, amount, user, date) VALUES (?1, ?2, ?3, ?4)",
                self.kind.table()
            ),
            (
                &new_transaction.source,
                new_transaction.amount,
                &new_transaction.user,
                &new_transaction.date,
            ),
        )?;

        let id = TransactionId::new(connection.last_insert_rowid());

        Ok(Transaction {
            id,
            source: new_transaction.source,
            amount: new_transaction.amount,
            user: new_transaction.user,
            date: new_transaction.date,
        })
    }

    /// Get the transaction with the specified `id`, or return
    /// [Error::NotFound] if no such transaction exists.
    ///
    /// # Panics
    ///
    /// Panics if the lock for the database connection is already held by the same thread.
    fn get(&self, id: TransactionId) -> Result<Transaction, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(&format!(
                "SELECT id, source, amount, user, date FROM {} WHERE id = :id",
                self.kind.table()
            ))?
            .query_row(&[(":id", &id.as_i64())], SqliteTransactionStore::map_row)
            .map_err(|error| error.into())
    }

    /// Get every transaction of the store's kind, ordered by date descending.
    ///
    /// An empty vector is returned if no transactions have been recorded.
    ///
    /// # Panics
    ///
    /// Panics if the lock for the database connection is already held by the same thread.
    fn list(&self) -> Result<Vec<Transaction>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(&format!(
                "SELECT id, source, amount, user, date FROM {} ORDER BY date DESC",
                self.kind.table()
            ))?
            .query_map([], SqliteTransactionStore::map_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
            .collect()
    }

    /// Remove the transaction with the specified `id`.
    ///
    /// Two racing deletes of the same record are serialized by SQLite; the
    /// loser sees zero rows affected and gets [Error::NotFound].
    ///
    /// # Panics
    ///
    /// Panics if the lock for the database connection is already held by the same thread.
    fn delete(&self, id: TransactionId) -> Result<(), Error> {
        let rows_affected = self.connection.lock().unwrap().execute(
            &format!("DELETE FROM {} WHERE id = :id", self.kind.table()),
            &[(":id", &id.as_i64())],
        )?;

        if rows_affected == 0 {
            Err(Error::NotFound)
        } else {
            Ok(())
        }
    }
}

impl CreateTable for SqliteTransactionStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        for kind in TransactionKind::ALL {
            connection.execute(
                &format!(
                    "CREATE TABLE {} (
                        id INTEGER PRIMARY KEY,
                        source TEXT NOT NULL,
                        amount REAL NOT NULL,
                        user TEXT NOT NULL,
                        date TEXT NOT NULL
                        )",
                    kind.table()
                ),
                (),
            )?;
        }

        Ok(())
    }
}

impl MapRow for SqliteTransactionStore {
    type ReturnType = Transaction;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        Ok(Transaction {
            id: TransactionId::new(row.get(offset)?),
            source: row.get(offset + 1)?,
            amount: row.get(offset + 2)?,
            user: row.get(offset + 3)?,
            date: row.get(offset + 4)?,
        })
    }
}
