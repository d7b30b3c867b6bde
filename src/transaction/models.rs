//! This file defines the income and expense record types.

use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A newtype wrapper for integer transaction IDs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionId(i64);

impl TransactionId {
    /// Wrap a raw database ID.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// The raw database ID.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Distinguishes the two transaction collections.
///
/// Income and expense records share a schema but live in separate tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransactionKind {
    /// Money earned.
    Income,
    /// Money spent.
    Expense,
}

impl TransactionKind {
    /// Both transaction kinds, in table creation order.
    pub const ALL: [TransactionKind; 2] = [TransactionKind::Income, TransactionKind::Expense];

    /// The SQLite table the kind's records are stored in.
    pub fn table(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "Income"),
            TransactionKind::Expense => write!(f, "Expense"),
        }
    }
}

/// A single income or expense record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The record's ID in the database.
    pub id: TransactionId,
    /// A text description of where the money came from or went.
    pub source: String,
    /// The amount of money earned or spent.
    pub amount: f64,
    /// The display name of the user that recorded the transaction.
    ///
    /// This is a plain text field, not a reference to the user table. Record
    /// ownership is checked by comparing it against the name the client
    /// sends with a delete request.
    pub user: String,
    /// When the transaction happened.
    pub date: DateTime<Utc>,
}

/// The fields needed to record a new transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// A text description of where the money came from or went.
    pub source: String,
    /// The amount of money earned or spent.
    pub amount: f64,
    /// The display name of the user recording the transaction.
    pub user: String,
    /// When the transaction happened.
    pub date: DateTime<Utc>,
}
