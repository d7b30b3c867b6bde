//! Contains traits and implementations for objects that store the domain models.

mod transaction;
mod user;

pub use transaction::{SqliteTransactionStore, TransactionStore};
pub use user::{SqliteUserStore, UserStore};
