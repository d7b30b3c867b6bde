//! The income and expense record endpoints and their supporting types.

mod create_endpoint;
mod delete_endpoint;
mod list_endpoint;
mod models;

pub use create_endpoint::{
    CreateTransactionRequest, create_expense_endpoint, create_income_endpoint,
};
pub use delete_endpoint::{
    DeleteTransactionRequest, delete_expense_endpoint, delete_income_endpoint,
};
pub use list_endpoint::{list_expenses_endpoint, list_incomes_endpoint};
pub use models::{NewTransaction, Transaction, TransactionId, TransactionKind};
