//! # campus-client
//!
//! Leptos + WASM frontend for the Campus university-services platform.
//! Students and teachers sign in per faculty, watch live campus telemetry
//! on the dashboard, and run or sit exams.
//!
//! This crate contains pages, components, application state, network types,
//! and the HTTP client layer. Session lifecycle (token restore, expiry
//! watching, login/logout) lives in [`state::session`]; every outgoing
//! request picks up the current credentials from [`net::http`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Client-side entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
