use super::*;

// =============================================================
// Header assembly
// =============================================================

#[test]
fn both_headers_when_token_and_tenant_present() {
    let creds = Credentials {
        token: Some("validToken".to_owned()),
        tenant_id: Some("engineering".to_owned()),
    };
    assert_eq!(
        auth_headers(&creds),
        vec![
            ("Authorization", "Bearer validToken".to_owned()),
            ("X-Tenant-Id", "engineering".to_owned()),
        ]
    );
}

#[test]
fn token_only_attaches_authorization_only() {
    let creds = Credentials { token: Some("t".to_owned()), tenant_id: None };
    assert_eq!(auth_headers(&creds), vec![("Authorization", "Bearer t".to_owned())]);
}

#[test]
fn tenant_only_attaches_tenant_header_only() {
    let creds = Credentials { token: None, tenant_id: Some("science".to_owned()) };
    assert_eq!(auth_headers(&creds), vec![("X-Tenant-Id", "science".to_owned())]);
}

#[test]
fn no_credentials_means_no_headers_at_all() {
    assert!(auth_headers(&Credentials::default()).is_empty());
}

// =============================================================
// Credential cell
// =============================================================

#[test]
fn set_credentials_replaces_the_pair_wholesale() {
    set_credentials(Some("a".to_owned()), Some("t1".to_owned()));
    assert_eq!(
        current_credentials(),
        Credentials { token: Some("a".to_owned()), tenant_id: Some("t1".to_owned()) }
    );

    set_credentials(Some("b".to_owned()), None);
    assert_eq!(
        current_credentials(),
        Credentials { token: Some("b".to_owned()), tenant_id: None }
    );

    set_credentials(None, None);
    assert_eq!(current_credentials(), Credentials::default());
}

// =============================================================
// Configuration
// =============================================================

#[test]
fn base_url_defaults_to_local_gateway() {
    // VITE_API_BASE_URL is not set for test builds.
    assert_eq!(base_url(), DEFAULT_BASE_URL);
}

#[test]
fn request_timeout_is_fixed() {
    assert_eq!(REQUEST_TIMEOUT_MS, 10_000);
}

// =============================================================
// Error mapping
// =============================================================

#[test]
fn error_message_prefers_json_message_field() {
    assert_eq!(
        error_message(401, r#"{"message":"Unauthorized","detail":"x"}"#),
        "Unauthorized"
    );
}

#[test]
fn error_message_falls_back_to_raw_body() {
    assert_eq!(error_message(500, "everything is on fire"), "everything is on fire");
}

#[test]
fn error_message_synthesizes_for_empty_body() {
    assert_eq!(error_message(500, ""), "request failed with status 500");
    assert_eq!(error_message(502, "  "), "request failed with status 502");
}

#[test]
fn status_accessor_only_reports_server_answers() {
    let status = ApiError::Status { status: 404, message: "nope".to_owned() };
    assert_eq!(status.status(), Some(404));
    assert_eq!(ApiError::Network("dns".to_owned()).status(), None);
    assert_eq!(ApiError::Timeout.status(), None);
}

#[test]
fn display_includes_status_and_message() {
    let err = ApiError::Status { status: 404, message: "not found".to_owned() };
    assert_eq!(err.to_string(), "HTTP 404: not found");
    assert_eq!(ApiError::Timeout.to_string(), "request timed out");
}
