//! The profile endpoint and its supporting type.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;

/// The fixed profile shown on the dashboard.
///
/// There is no session mechanism tying requests to an account, so the
/// profile endpoint serves this placeholder value. It is constructed once at
/// startup and held in [AppState] as immutable data.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    /// The profile's ID.
    pub id: i64,
    /// The display name shown on the dashboard.
    pub name: String,
}

impl Profile {
    /// The demo profile.
    pub fn demo() -> Self {
        Self {
            id: 1,
            name: "Darsh".to_string(),
        }
    }
}

/// A route handler for getting the current user's profile.
pub async fn get_profile(State(state): State<AppState>) -> Json<Profile> {
    Json(state.profile.clone())
}

#[cfg(test)]
mod profile_tests {
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::{Value, json};

    use crate::{AppState, build_router};

    fn get_test_server() -> TestServer {
        let connection = Connection::open_in_memory().expect("Could not open database in memory.");
        let state = AppState::new(connection, "static").expect("Could not initialize database.");

        TestServer::new(build_router(state))
    }

    #[tokio::test]
    async fn get_profile_returns_the_demo_profile() {
        let server = get_test_server();

        let response = server.get("/api/user/profile").await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!({ "id": 1, "name": "Darsh" })
        );
    }
}
