//! Application router configuration for the API and the prebuilt front-end pages.

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
};

use crate::{
    endpoints,
    log_in::log_in,
    profile::get_profile,
    register_user::register_user,
    state::AppState,
    transaction::{
        create_expense_endpoint, create_income_endpoint, delete_expense_endpoint,
        delete_income_endpoint, list_expenses_endpoint, list_incomes_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// The pretty URLs serve the prebuilt pages from the front-end directory in
/// [AppState]; any other unmatched path falls back to static file serving
/// from that directory.
pub fn build_router(state: AppState) -> Router {
    let frontend_dir = state.frontend_dir.clone();

    Router::new()
        .route(endpoints::PROFILE, get(get_profile))
        .route(
            endpoints::INCOME,
            get(list_incomes_endpoint).post(create_income_endpoint),
        )
        .route(endpoints::DELETE_INCOME, delete(delete_income_endpoint))
        .route(
            endpoints::EXPENSE,
            get(list_expenses_endpoint).post(create_expense_endpoint),
        )
        .route(endpoints::DELETE_EXPENSE, delete(delete_expense_endpoint))
        .route(endpoints::SIGN_UP, post(register_user))
        .route(endpoints::LOG_IN, post(log_in))
        .route_service(
            endpoints::ROOT,
            ServeFile::new(frontend_dir.join("login.html")),
        )
        .route_service(
            endpoints::LOG_IN_VIEW,
            ServeFile::new(frontend_dir.join("login.html")),
        )
        .route_service(
            endpoints::SIGN_UP_VIEW,
            ServeFile::new(frontend_dir.join("signup.html")),
        )
        .route_service(
            endpoints::DASHBOARD_VIEW,
            ServeFile::new(frontend_dir.join("dashboard.html")),
        )
        .fallback_service(ServeDir::new(frontend_dir))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod page_tests {
    use axum_test::TestServer;
    use rusqlite::Connection;

    use crate::{AppState, build_router};

    fn get_test_server() -> TestServer {
        let connection = Connection::open_in_memory().expect("Could not open database in memory.");
        let state = AppState::new(connection, "static").expect("Could not initialize database.");

        TestServer::new(build_router(state))
    }

    #[tokio::test]
    async fn pretty_urls_serve_the_prebuilt_pages() {
        let server = get_test_server();

        for path in ["/", "/login", "/signup", "/dashboard"] {
            let response = server.get(path).await;

            response.assert_status_ok();
            assert!(
                response.text().contains("<!doctype html>"),
                "expected {path} to serve an HTML page"
            );
        }
    }
}
