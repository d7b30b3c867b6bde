//! The endpoints for recording a new income or expense.

use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::Error,
    state::AppState,
    stores::{SqliteTransactionStore, TransactionStore},
    transaction::{NewTransaction, Transaction},
};

/// The expected fields for recording a new transaction.
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    /// A text description of where the money came from or went.
    #[serde(default)]
    pub source: String,
    /// The amount of money, either as a JSON number or as a numeric string
    /// (the dashboard form submits strings).
    #[serde(default)]
    pub amount: Value,
    /// The display name of the user recording the transaction.
    #[serde(default)]
    pub user: String,
    /// When the transaction happened. Defaults to the current time.
    #[serde(default)]
    pub date: Option<String>,
}

/// A route handler for recording a new income entry.
pub async fn create_income_endpoint(
    State(state): State<AppState>,
    Json(request): Json<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<Transaction>), Error> {
    create_transaction(&state.income_store, request)
}

/// A route handler for recording a new expense entry.
pub async fn create_expense_endpoint(
    State(state): State<AppState>,
    Json(request): Json<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<Transaction>), Error> {
    create_transaction(&state.expense_store, request)
}

fn create_transaction(
    store: &SqliteTransactionStore,
    request: CreateTransactionRequest,
) -> Result<(StatusCode, Json<Transaction>), Error> {
    let amount = match parse_amount(&request.amount) {
        Some(amount) if !request.source.is_empty() && !request.user.is_empty() => amount,
        _ => {
            return Err(Error::Validation(
                "Source, user, and numeric amount are required.",
            ));
        }
    };

    let date = match request.date.as_deref() {
        None | Some("") => Utc::now(),
        Some(text) => parse_date(text)?,
    };

    let transaction = store.create(NewTransaction {
        source: request.source,
        amount,
        user: request.user,
        date,
    })?;

    Ok((StatusCode::CREATED, Json(transaction)))
}

/// Coerce the amount field to a finite number.
///
/// Accepts a JSON number or a string that parses to one; anything else is a
/// validation failure.
fn parse_amount(value: &Value) -> Option<f64> {
    let amount = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse().ok()?,
        _ => return None,
    };

    amount.is_finite().then_some(amount)
}

/// Parse a client-supplied date, either a full timestamp or a bare date.
///
/// A string that parses as neither is not a validation failure: malformed
/// dates surface as the generic server error, matching how the dashboard has
/// always behaved.
fn parse_date(text: &str) -> Result<DateTime<Utc>, Error> {
    if let Ok(date_time) = text.parse::<DateTime<Utc>>() {
        return Ok(date_time);
    }

    text.parse::<NaiveDate>()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| Error::InvalidDate(text.to_string()))
}
