//! The endpoints for listing income and expense records.

use axum::{Json, extract::State};

use crate::{
    error::Error,
    state::AppState,
    stores::{SqliteTransactionStore, TransactionStore},
    transaction::Transaction,
};

/// A route handler for listing every income record, most recent first.
///
/// There is no pagination and no per-user filtering; every client sees every
/// user's records.
pub async fn list_incomes_endpoint(
    State(state): State<AppState>,
) -> Result<Json<Vec<Transaction>>, Error> {
    list_transactions(&state.income_store)
}

/// A route handler for listing every expense record, most recent first.
pub async fn list_expenses_endpoint(
    State(state): State<AppState>,
) -> Result<Json<Vec<Transaction>>, Error> {
    list_transactions(&state.expense_store)
}

fn list_transactions(store: &SqliteTransactionStore) -> Result<Json<Vec<Transaction>>, Error> {
    Ok(Json(store.list()?))
}
