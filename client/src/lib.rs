//! # client
//!
//! Leptos + WASM admin console for events, faculty role assignments, and
//! authentication state, talking to a remote REST backend.
//!
//! The core is the client-side auth gate: `state::session` (session store),
//! `state::auth` (the context exposing it), `util::auth` + the `RoleGuard`
//! component (route guarding), and the login page (credential exchange).
//! Everything else is CRUD views consuming that gate.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: mount over the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
