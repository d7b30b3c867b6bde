//! The endpoints for deleting an income or expense record.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    error::Error,
    state::AppState,
    stores::{SqliteTransactionStore, TransactionStore},
    transaction::TransactionId,
};

/// The expected fields for a delete request.
#[derive(Debug, Deserialize)]
pub struct DeleteTransactionRequest {
    /// The display name of the acting user.
    ///
    /// Deletion only succeeds when this matches the record's `user` field.
    /// The name is supplied by the client itself, so this is a compatibility
    /// check rather than a security boundary.
    #[serde(default)]
    pub user: String,
}

/// A route handler for deleting an income record after an ownership check.
pub async fn delete_income_endpoint(
    State(state): State<AppState>,
    Path(id): Path<TransactionId>,
    Json(request): Json<DeleteTransactionRequest>,
) -> Result<Json<Value>, Error> {
    delete_transaction(&state.income_store, id, request)
}

/// A route handler for deleting an expense record after an ownership check.
pub async fn delete_expense_endpoint(
    State(state): State<AppState>,
    Path(id): Path<TransactionId>,
    Json(request): Json<DeleteTransactionRequest>,
) -> Result<Json<Value>, Error> {
    delete_transaction(&state.expense_store, id, request)
}

fn delete_transaction(
    store: &SqliteTransactionStore,
    id: TransactionId,
    request: DeleteTransactionRequest,
) -> Result<Json<Value>, Error> {
    let transaction = store.get(id)?;

    if transaction.user != request.user {
        return Err(Error::Forbidden);
    }

    store.delete(id)?;

    Ok(Json(json!({
        "message": format!("{} deleted", store.kind()),
    })))
}

#[cfg(test)]
mod delete_endpoint_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::{Value, json};

    use crate::{AppState, build_router, transaction::Transaction};

    fn get_test_server() -> TestServer {
        let connection = Connection::open_in_memory().expect("Could not open database in memory.");
        let state = AppState::new(connection, "static").expect("Could not initialize database.");

        TestServer::new(build_router(state))
    }

    async fn create_expense(server: &TestServer, user: &str) -> Transaction {
        let response = server
            .post("/api/expense")
            .content_type("application/json")
            .json(&json!({
                "source": "Groceries",
                "amount": 42.5,
                "user": user,
            }))
            .await;

        response.assert_status(StatusCode::CREATED);

        response.json::<Transaction>()
    }

    #[tokio::test]
    async fn delete_fails_with_non_existent_id() {
        let server = get_test_server();

        server
            .delete("/api/expense/1337")
            .content_type("application/json")
            .json(&json!({ "user": "Darsh" }))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_fails_for_another_users_record() {
        let server = get_test_server();
        let expense = create_expense(&server, "Darsh").await;

        server
            .delete(&format!("/api/expense/{}", expense.id))
            .content_type("application/json")
            .json(&json!({ "user": "Someone Else" }))
            .await
            .assert_status(StatusCode::FORBIDDEN);

        // The record must survive the rejected delete.
        let listed = server.get("/api/expense").await.json::<Vec<Transaction>>();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, expense.id);
    }

    #[tokio::test]
    async fn delete_succeeds_for_the_owner() {
        let server = get_test_server();
        let expense = create_expense(&server, "Darsh").await;

        let response = server
            .delete(&format!("/api/expense/{}", expense.id))
            .content_type("application/json")
            .json(&json!({ "user": "Darsh" }))
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!({ "message": "Expense deleted" })
        );

        let listed = server.get("/api/expense").await.json::<Vec<Transaction>>();
        assert_eq!(listed, vec![]);
    }

    #[tokio::test]
    async fn delete_income_reports_its_own_kind() {
        let server = get_test_server();

        let response = server
            .post("/api/income")
            .content_type("application/json")
            .json(&json!({
                "source": "Salary",
                "amount": 2500,
                "user": "Darsh",
            }))
            .await;
        let income = response.json::<Transaction>();

        let response = server
            .delete(&format!("/api/income/{}", income.id))
            .content_type("application/json")
            .json(&json!({ "user": "Darsh" }))
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!({ "message": "Income deleted" })
        );
    }
}
