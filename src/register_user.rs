//! The sign-up endpoint for creating a new user account.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    error::Error, password::PasswordHash, state::AppState, stores::UserStore,
};

/// The expected fields for the sign-up form.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// The display name of the new user.
    #[serde(default)]
    pub name: String,
    /// The email address to register, unique across all users.
    #[serde(default)]
    pub email: String,
    /// The plaintext password, only ever stored as a salted hash.
    #[serde(default)]
    pub password: String,
}

/// A route handler for creating a new user account.
///
/// The response contains neither the created ID nor any password material.
pub async fn register_user(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Value>), Error> {
    if request.name.is_empty() || request.email.is_empty() || request.password.is_empty() {
        return Err(Error::Validation("Name, email, and password are required."));
    }

    let password_hash =
        PasswordHash::from_raw_password(&request.password, PasswordHash::DEFAULT_COST)?;

    state
        .user_store
        .create(&request.name, &request.email, password_hash)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User created successfully." })),
    ))
}
