//! Bearer-token payload decoding.
//!
//! Tokens are three dot-separated base64url segments; only the middle
//! (payload) segment is read client-side. The signature is never verified
//! here (that is the gateway's job), so every claim is treated as
//! untrusted display/routing data.
//!
//! ERROR HANDLING
//! ==============
//! Decoding never fails loudly: malformed input yields an invalid result
//! with no claims, an expired token yields an invalid result that still
//! carries its claims.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::Value;

use crate::util::time;

/// Claims the client reads out of a token payload.
///
/// Extraction is lenient: a claim that is absent or has the wrong JSON type
/// reads as `None`, it never turns a well-formed payload into a decode
/// failure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenClaims {
    /// Expiry, seconds since the Unix epoch. Absent means non-expiring.
    pub exp: Option<u64>,
    pub sub: Option<String>,
    pub role: Option<String>,
    pub tenant: Option<String>,
    pub username: Option<String>,
}

impl TokenClaims {
    fn from_value(value: &Value) -> Self {
        Self {
            exp: value.get("exp").and_then(Value::as_u64),
            sub: str_claim(value, "sub"),
            role: str_claim(value, "role"),
            tenant: str_claim(value, "tenant"),
            username: str_claim(value, "username"),
        }
    }
}

fn str_claim(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(ToOwned::to_owned)
}

/// Result of decoding a token.
///
/// `claims` is `Some` whenever the payload parsed, even if the token is
/// expired; `is_valid` is the authoritative yes/no.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedToken {
    pub claims: Option<TokenClaims>,
    pub is_valid: bool,
}

impl DecodedToken {
    const fn malformed() -> Self {
        Self { claims: None, is_valid: false }
    }
}

/// Decode a token against an explicit clock (milliseconds since epoch).
pub fn decode_at(token: &str, now_ms: u64) -> DecodedToken {
    let mut parts = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return DecodedToken::malformed();
    };

    let Ok(bytes) = URL_SAFE_NO_PAD.decode(payload) else {
        return DecodedToken::malformed();
    };
    let Ok(value) = serde_json::from_slice::<Value>(&bytes) else {
        return DecodedToken::malformed();
    };

    let claims = TokenClaims::from_value(&value);
    let expired = claims
        .exp
        .is_some_and(|exp| now_ms >= exp.saturating_mul(1000));

    DecodedToken { claims: Some(claims), is_valid: !expired }
}

/// Decode a token against the current wall-clock.
pub fn decode(token: &str) -> DecodedToken {
    decode_at(token, time::now_ms())
}
