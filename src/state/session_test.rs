use super::*;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

fn make_token(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
    format!("{header}.{body}.signature")
}

fn student_token(tenant: Option<&str>) -> String {
    let mut payload = serde_json::json!({
        "sub": "student-1",
        "role": "STUDENT",
        "username": "ada",
    });
    if let Some(tenant) = tenant {
        payload["tenant"] = serde_json::Value::String(tenant.to_owned());
    }
    make_token(&payload)
}

// =============================================================
// SessionState basics
// =============================================================

#[test]
fn default_state_is_uninitialized_and_anonymous() {
    let state = SessionState::default();
    assert_eq!(state.phase, SessionPhase::Uninitialized);
    assert!(!state.is_authenticated());
    assert!(state.is_loading());
}

#[test]
fn role_parsing_accepts_known_roles_only() {
    assert_eq!(Role::parse("STUDENT"), Some(Role::Student));
    assert_eq!(Role::parse("TEACHER"), Some(Role::Teacher));
    assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
    assert_eq!(Role::parse("student"), None);
    assert_eq!(Role::parse("JANITOR"), None);
}

// =============================================================
// Tenant resolution
// =============================================================

#[test]
fn explicit_tenant_overrides_token_claim() {
    let claims = TokenClaims { tenant: Some("science".to_owned()), ..Default::default() };
    assert_eq!(
        resolve_tenant(Some("engineering"), &claims),
        Some("engineering".to_owned())
    );
}

#[test]
fn absent_explicit_tenant_falls_back_to_claim() {
    let claims = TokenClaims { tenant: Some("science".to_owned()), ..Default::default() };
    assert_eq!(resolve_tenant(None, &claims), Some("science".to_owned()));
}

#[test]
fn no_tenant_anywhere_resolves_to_none() {
    assert_eq!(resolve_tenant(None, &TokenClaims::default()), None);
}

// =============================================================
// login
// =============================================================

#[test]
fn login_with_valid_token_replaces_session() {
    let session = RwSignal::new(SessionState::default());
    let token = student_token(Some("science"));

    login(session, &token, Some("engineering")).expect("valid login");

    let state = session.get_untracked();
    assert_eq!(state.phase, SessionPhase::Authenticated);
    assert!(state.is_authenticated());
    assert_eq!(state.token.as_deref(), Some(token.as_str()));
    assert_eq!(state.tenant_id.as_deref(), Some("engineering"));
    assert_eq!(state.user_id.as_deref(), Some("student-1"));
    assert_eq!(state.username.as_deref(), Some("ada"));
    assert_eq!(state.role, Some(Role::Student));
}

#[test]
fn login_without_explicit_tenant_uses_token_claim() {
    let session = RwSignal::new(SessionState::default());

    login(session, &student_token(Some("science")), None).expect("valid login");

    assert_eq!(session.get_untracked().tenant_id.as_deref(), Some("science"));
}

#[test]
fn login_propagates_credentials_to_http_layer() {
    let session = RwSignal::new(SessionState::default());
    let token = student_token(None);

    login(session, &token, Some("engineering")).expect("valid login");

    let headers = http::auth_headers(&http::current_credentials());
    assert!(headers.contains(&("Authorization", format!("Bearer {token}"))));
    assert!(headers.contains(&("X-Tenant-Id", "engineering".to_owned())));
}

#[test]
fn login_with_invalid_token_is_rejected_and_leaves_session_untouched() {
    let session = RwSignal::new(SessionState::default());
    login(session, &student_token(Some("science")), None).expect("valid login");
    let before = session.get_untracked();

    assert_eq!(login(session, "not-a-token", Some("engineering")), Err(InvalidToken));
    assert_eq!(session.get_untracked(), before);
}

#[test]
fn login_with_expired_token_is_rejected() {
    let session = RwSignal::new(SessionState::default());
    let token = make_token(&serde_json::json!({ "sub": "s-1", "exp": 1 }));

    assert_eq!(login(session, &token, None), Err(InvalidToken));
    assert_eq!(session.get_untracked().phase, SessionPhase::Uninitialized);
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_session_and_credentials() {
    let session = RwSignal::new(SessionState::default());
    login(session, &student_token(Some("science")), None).expect("valid login");

    logout(session);

    let state = session.get_untracked();
    assert_eq!(state.phase, SessionPhase::Anonymous);
    assert!(!state.is_authenticated());
    assert_eq!(state.token, None);
    assert_eq!(state.tenant_id, None);
    assert_eq!(state.user_id, None);
    assert_eq!(state.username, None);
    assert_eq!(state.role, None);

    // No credential headers on subsequent requests.
    assert!(http::auth_headers(&http::current_credentials()).is_empty());
}

#[test]
fn credential_changes_bump_the_watcher_epoch() {
    let session = RwSignal::new(SessionState::default());
    let initial = session.get_untracked().epoch;

    login(session, &student_token(None), None).expect("valid login");
    let after_login = session.get_untracked().epoch;
    assert!(after_login > initial);

    logout(session);
    assert!(session.get_untracked().epoch > after_login);
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_without_persisted_token_lands_anonymous() {
    // Native builds have no localStorage, so this exercises the
    // nothing-persisted path end to end.
    let session = RwSignal::new(SessionState::default());

    initialize(session);

    let state = session.get_untracked();
    assert_eq!(state.phase, SessionPhase::Anonymous);
    assert!(!state.is_loading());
    assert!(!state.is_authenticated());
}
