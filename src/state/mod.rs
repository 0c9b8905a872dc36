//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `toast`, `dashboard`) so individual
//! components can depend on small focused models. The session module owns
//! the only cross-cutting state: the authenticated identity used by the
//! HTTP layer.

pub mod dashboard;
pub mod session;
pub mod toast;
pub mod token;
