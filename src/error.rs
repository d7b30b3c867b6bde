//! Defines the app level error type and its mapping to JSON error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request was missing a required field or contained a value that
    /// could not be understood.
    #[error("{0}")]
    Validation(&'static str),

    /// The email and password combination did not match a registered user.
    ///
    /// An unknown email and a wrong password produce the same error so that
    /// clients cannot probe which addresses are registered.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// The email used to sign up is already registered.
    #[error("the email is already registered")]
    DuplicateEmail,

    /// The acting user does not own the record they tried to remove.
    #[error("the record belongs to another user")]
    Forbidden,

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// A date string could not be parsed as a timestamp.
    ///
    /// The offending string should only be logged for debugging on the
    /// server; clients receive a generic error response.
    #[error("could not parse \"{0}\" as a date")]
    InvalidDate(String),

    /// An unexpected error occurred with the underlying hashing library.
    ///
    /// The error string should only be logged for debugging on the server.
    #[error("hashing failed: {0}")]
    HashingError(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            // Code 2067 occurs when a UNIQUE constraint failed.
            rusqlite::Error::SqliteFailure(sql_error, Some(ref desc))
                if sql_error.extended_code == 2067 && desc.contains("email") =>
            {
                Error::DuplicateEmail
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            Error::Validation(message) => (StatusCode::BAD_REQUEST, message.to_string()),
            Error::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid email or password.".to_string(),
            ),
            Error::DuplicateEmail => (
                StatusCode::CONFLICT,
                "Email already registered.".to_string(),
            ),
            Error::Forbidden => (
                StatusCode::FORBIDDEN,
                "You can only delete your own transactions".to_string(),
            ),
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                "The requested resource could not be found.".to_string(),
            ),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
