//! Session lifecycle: the authoritative in-memory identity.
//!
//! DESIGN
//! ======
//! A single `RwSignal<SessionState>` is provided via context from the app
//! root. This module is the only writer of that signal and the only writer
//! of the HTTP layer's credential pair ([`crate::net::http::set_credentials`]);
//! pages call [`login`]/[`logout`] and read the rest.
//!
//! Lifecycle: [`initialize`] restores a persisted token once at startup,
//! [`login`] replaces the session wholesale, [`logout`] (or the background
//! expiry watcher) clears it. Session fields are only ever populated from a
//! token that decoded as valid.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;

use leptos::prelude::*;

use crate::net::http;
use crate::state::token::{self, TokenClaims};
use crate::util::storage;

/// `localStorage` key holding the bearer token.
pub const TOKEN_KEY: &str = "sup_token";
/// `localStorage` key holding the resolved tenant (faculty) id.
pub const TENANT_KEY: &str = "sup_tenant";

/// Interval between background token-expiry checks.
const EXPIRY_CHECK_SECS: u64 = 60;

/// Where the session is in its lifecycle.
///
/// `Loading` is left exactly once per application lifetime, to either
/// `Authenticated` or `Anonymous`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Uninitialized,
    Loading,
    Authenticated,
    Anonymous,
}

/// Platform roles carried in the token's `role` claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl Role {
    /// Parse the wire spelling of a role. Unknown roles read as `None`
    /// rather than failing the session.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "STUDENT" => Some(Self::Student),
            "TEACHER" => Some(Self::Teacher),
            "ADMIN" => Some(Self::Admin),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "STUDENT",
            Self::Teacher => "TEACHER",
            Self::Admin => "ADMIN",
        }
    }
}

/// The current authenticated identity, or the lack of one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub token: Option<String>,
    pub tenant_id: Option<String>,
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub role: Option<Role>,
    /// Bumped on every credential change; lets the expiry watcher detect
    /// that it has been superseded.
    epoch: u64,
}

impl SessionState {
    /// Derived, never independently settable.
    pub fn is_authenticated(&self) -> bool {
        self.phase == SessionPhase::Authenticated && self.token.is_some()
    }

    /// True until `initialize` has reached a terminal phase.
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SessionPhase::Uninitialized | SessionPhase::Loading)
    }

    pub fn is_teacher(&self) -> bool {
        self.role == Some(Role::Teacher)
    }

    /// Replace every field from a validated token.
    fn apply_login(&mut self, token: String, claims: &TokenClaims, tenant: Option<String>) {
        self.phase = SessionPhase::Authenticated;
        self.token = Some(token);
        self.tenant_id = tenant;
        self.user_id = claims.sub.clone();
        self.username = claims.username.clone();
        self.role = claims.role.as_deref().and_then(Role::parse);
        self.epoch += 1;
    }

    /// Clear every field, landing in `Anonymous`.
    fn apply_clear(&mut self) {
        self.phase = SessionPhase::Anonymous;
        self.token = None;
        self.tenant_id = None;
        self.user_id = None;
        self.username = None;
        self.role = None;
        self.epoch += 1;
    }
}

/// Login was rejected because the supplied token failed validation.
/// The pre-existing session is untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidToken;

impl fmt::Display for InvalidToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("token failed validation")
    }
}

impl std::error::Error for InvalidToken {}

/// The tenant actually used for a login: the explicitly supplied one wins,
/// else the token's own `tenant` claim, else absent.
fn resolve_tenant(explicit: Option<&str>, claims: &TokenClaims) -> Option<String> {
    explicit.map(ToOwned::to_owned).or_else(|| claims.tenant.clone())
}

/// Restore a persisted session at application start.
///
/// Reads the stored token and tenant; a token that decodes valid populates
/// the session and the HTTP credentials, anything else purges storage.
/// Either way the session leaves `Loading` exactly once.
pub fn initialize(session: RwSignal<SessionState>) {
    session.update(|s| s.phase = SessionPhase::Loading);

    let stored_tenant = storage::get(TENANT_KEY);
    if let Some(stored) = storage::get(TOKEN_KEY) {
        let decoded = token::decode(&stored);
        if decoded.is_valid {
            if let Some(claims) = decoded.claims {
                let tenant = stored_tenant.or_else(|| claims.tenant.clone());
                session.update(|s| s.apply_login(stored.clone(), &claims, tenant.clone()));
                http::set_credentials(Some(stored), tenant);
                spawn_expiry_watcher(session);
                return;
            }
        }
        leptos::logging::log!("clearing expired or invalid persisted token");
        storage::remove(TOKEN_KEY);
        storage::remove(TENANT_KEY);
    }

    session.update(|s| {
        s.phase = SessionPhase::Anonymous;
        s.epoch += 1;
    });
}

/// Establish a session from a freshly issued token.
///
/// An invalid token leaves the existing session untouched and is reported
/// to the caller. On success the token (and resolved tenant, when present)
/// are persisted, the session is replaced wholesale, and the HTTP layer
/// picks up the new credentials.
pub fn login(
    session: RwSignal<SessionState>,
    token: &str,
    explicit_tenant: Option<&str>,
) -> Result<(), InvalidToken> {
    let decoded = token::decode(token);
    let claims = match decoded.claims {
        Some(claims) if decoded.is_valid => claims,
        _ => {
            leptos::logging::error!("login rejected: token failed validation");
            return Err(InvalidToken);
        }
    };

    let tenant = resolve_tenant(explicit_tenant, &claims);
    storage::set(TOKEN_KEY, token);
    if let Some(tenant) = &tenant {
        storage::set(TENANT_KEY, tenant);
    }

    session.update(|s| s.apply_login(token.to_owned(), &claims, tenant.clone()));
    http::set_credentials(Some(token.to_owned()), tenant);
    spawn_expiry_watcher(session);
    Ok(())
}

/// Drop the session: clear state, purge storage, strip credentials from
/// outgoing requests. The running expiry watcher notices the epoch bump
/// and exits.
pub fn logout(session: RwSignal<SessionState>) {
    session.update(SessionState::apply_clear);
    storage::remove(TOKEN_KEY);
    storage::remove(TENANT_KEY);
    http::set_credentials(None, None);
}

/// Re-check the current token every [`EXPIRY_CHECK_SECS`] and log out when
/// it stops being valid. Each watcher is pinned to the session epoch it was
/// started under; any later login/logout supersedes it.
fn spawn_expiry_watcher(session: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    {
        let epoch = session.get_untracked().epoch;
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(EXPIRY_CHECK_SECS))
                    .await;

                let state = session.get_untracked();
                if state.epoch != epoch {
                    break;
                }
                let Some(current) = state.token else {
                    break;
                };
                if !token::decode(&current).is_valid {
                    leptos::logging::log!("session token expired, logging out");
                    logout(session);
                    break;
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}
