//! The API endpoint URIs.

/// The root route, which serves the log-in page.
pub const ROOT: &str = "/";
/// The route for the log-in page.
pub const LOG_IN_VIEW: &str = "/login";
/// The route for the sign-up page.
pub const SIGN_UP_VIEW: &str = "/signup";
/// The route for the dashboard page.
pub const DASHBOARD_VIEW: &str = "/dashboard";

/// The route for the current user's profile.
pub const PROFILE: &str = "/api/user/profile";
/// The route to list and create income records.
pub const INCOME: &str = "/api/income";
/// The route to delete a single income record.
pub const DELETE_INCOME: &str = "/api/income/{id}";
/// The route to list and create expense records.
pub const EXPENSE: &str = "/api/expense";
/// The route to delete a single expense record.
pub const DELETE_EXPENSE: &str = "/api/expense/{id}";
/// The route for creating a new user account.
pub const SIGN_UP: &str = "/api/signup";
/// The route for checking a user's credentials.
pub const LOG_IN: &str = "/api/login";

// These tests are here so that we know the route definitions will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::LOG_IN_VIEW);
        assert_endpoint_is_valid_uri(endpoints::SIGN_UP_VIEW);
        assert_endpoint_is_valid_uri(endpoints::DASHBOARD_VIEW);

        assert_endpoint_is_valid_uri(endpoints::PROFILE);
        assert_endpoint_is_valid_uri(endpoints::INCOME);
        assert_endpoint_is_valid_uri(endpoints::DELETE_INCOME);
        assert_endpoint_is_valid_uri(endpoints::EXPENSE);
        assert_endpoint_is_valid_uri(endpoints::DELETE_EXPENSE);
        assert_endpoint_is_valid_uri(endpoints::SIGN_UP);
        assert_endpoint_is_valid_uri(endpoints::LOG_IN);
    }
}
