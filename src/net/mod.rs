//! Network layer: HTTP client plumbing, endpoint helpers, and wire types.

pub mod api;
pub mod http;
pub mod types;
