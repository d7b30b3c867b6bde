//! The log-in endpoint for checking a user's credentials.

use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{error::Error, state::AppState, stores::UserStore};

/// The expected fields for the log-in form.
#[derive(Debug, Deserialize)]
pub struct LogInRequest {
    /// The email address entered during log-in.
    #[serde(default)]
    pub email: String,
    /// The password entered during log-in.
    #[serde(default)]
    pub password: String,
}

/// A route handler for checking a user's credentials.
///
/// On success the response carries the user's ID, name, and email for the
/// client to hold on to. No session token or cookie is issued.
pub async fn log_in(
    State(state): State<AppState>,
    Json(request): Json<LogInRequest>,
) -> Result<Json<Value>, Error> {
    if request.email.is_empty() || request.password.is_empty() {
        return Err(Error::Validation("Email and password are required."));
    }

    // An unknown email is reported the same way as a wrong password.
    let user = state
        .user_store
        .get_by_email(&request.email)
        .map_err(|error| match error {
            Error::NotFound => Error::InvalidCredentials,
            error => error,
        })?;

    if !user.password_hash().verify(&request.password)? {
        return Err(Error::InvalidCredentials);
    }

    Ok(Json(json!({
        "message": "Login successful",
        "user": {
            "id": user.id(),
            "name": user.name(),
            "email": user.email(),
        },
    })))
}
