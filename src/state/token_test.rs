use super::*;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// A fixed "now" so expiry math is deterministic: 2023-11-14T22:13:20Z.
const NOW_MS: u64 = 1_700_000_000_000;
const NOW_SECS: u64 = NOW_MS / 1000;

fn token_with_payload(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
    format!("{header}.{body}.signature")
}

// =============================================================
// Expiry
// =============================================================

#[test]
fn expired_token_is_invalid_but_keeps_claims() {
    let token = token_with_payload(&serde_json::json!({
        "exp": NOW_SECS - 10,
        "sub": "student-1",
    }));
    let decoded = decode_at(&token, NOW_MS);

    assert!(!decoded.is_valid);
    let claims = decoded.claims.expect("claims survive expiry");
    assert_eq!(claims.exp, Some(NOW_SECS - 10));
    assert_eq!(claims.sub.as_deref(), Some("student-1"));
}

#[test]
fn future_exp_is_valid_with_claims_intact() {
    let token = token_with_payload(&serde_json::json!({
        "exp": NOW_SECS + 3600,
        "sub": "student-1",
        "role": "STUDENT",
        "tenant": "engineering",
        "username": "ada",
    }));
    let decoded = decode_at(&token, NOW_MS);

    assert!(decoded.is_valid);
    let claims = decoded.claims.expect("claims");
    assert_eq!(claims.sub.as_deref(), Some("student-1"));
    assert_eq!(claims.role.as_deref(), Some("STUDENT"));
    assert_eq!(claims.tenant.as_deref(), Some("engineering"));
    assert_eq!(claims.username.as_deref(), Some("ada"));
}

#[test]
fn missing_exp_means_non_expiring() {
    let token = token_with_payload(&serde_json::json!({ "sub": "s-1" }));
    assert!(decode_at(&token, NOW_MS).is_valid);
    assert!(decode_at(&token, u64::MAX).is_valid);
}

#[test]
fn expiry_boundary_is_inclusive() {
    // "at or past" the expiry instant counts as expired.
    let token = token_with_payload(&serde_json::json!({ "exp": NOW_SECS }));
    assert!(!decode_at(&token, NOW_SECS * 1000).is_valid);
    assert!(decode_at(&token, NOW_SECS * 1000 - 1).is_valid);
}

// =============================================================
// Malformed input
// =============================================================

#[test]
fn wrong_segment_count_is_malformed() {
    for input in ["", "abc", "a.b", "a.b.c.d", "..."] {
        let decoded = decode_at(input, NOW_MS);
        assert!(!decoded.is_valid, "{input:?} should be invalid");
        assert!(decoded.claims.is_none(), "{input:?} should carry no claims");
    }
}

#[test]
fn non_base64_payload_is_malformed() {
    let decoded = decode_at("header.!!not-base64!!.sig", NOW_MS);
    assert!(!decoded.is_valid);
    assert!(decoded.claims.is_none());
}

#[test]
fn non_json_payload_is_malformed() {
    let payload = URL_SAFE_NO_PAD.encode(b"this is not json");
    let decoded = decode_at(&format!("h.{payload}.s"), NOW_MS);
    assert!(!decoded.is_valid);
    assert!(decoded.claims.is_none());
}

// =============================================================
// Lenient claim extraction
// =============================================================

#[test]
fn wrong_typed_claims_read_as_absent() {
    let token = token_with_payload(&serde_json::json!({
        "sub": 42,
        "role": ["STUDENT"],
        "tenant": null,
    }));
    let decoded = decode_at(&token, NOW_MS);

    assert!(decoded.is_valid);
    let claims = decoded.claims.expect("claims");
    assert_eq!(claims.sub, None);
    assert_eq!(claims.role, None);
    assert_eq!(claims.tenant, None);
}

#[test]
fn non_object_payload_yields_empty_claims() {
    let payload = URL_SAFE_NO_PAD.encode(b"123");
    let decoded = decode_at(&format!("h.{payload}.s"), NOW_MS);

    assert!(decoded.is_valid);
    assert_eq!(decoded.claims, Some(TokenClaims::default()));
}
