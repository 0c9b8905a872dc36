use super::*;

// =============================================================
// Login error mapping
// =============================================================

#[test]
fn unauthorized_maps_to_bad_credentials_message() {
    let err = ApiError::Status { status: 401, message: "Unauthorized".to_owned() };
    assert_eq!(
        login_error_message(&err),
        "Invalid username or password. Please try again."
    );
}

#[test]
fn not_found_maps_to_unknown_user_message() {
    let err = ApiError::Status { status: 404, message: "No such user".to_owned() };
    assert_eq!(
        login_error_message(&err),
        "User not found. Please check your username and faculty."
    );
}

#[test]
fn other_statuses_surface_the_server_message() {
    let err = ApiError::Status { status: 503, message: "Auth service warming up".to_owned() };
    assert_eq!(login_error_message(&err), "Auth service warming up");
}

#[test]
fn network_and_timeout_errors_get_generic_messages() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(login_error_message(&err), "Network error: connection refused");

    assert_eq!(
        login_error_message(&ApiError::Timeout),
        "The server took too long to respond."
    );
}
