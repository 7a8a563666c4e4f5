//! # lifeboard
//!
//! Leptos + WASM frontend for a personal-productivity application: auth
//! flows (sign in/up, password reset, email verification), a role- and
//! permission-gated dashboard, and CRUD views over notes, todos, diary
//! entries, projects, and resources.
//!
//! All business logic (password hashing, token issuance, persistence,
//! authorization enforcement) lives in the external API server; this crate
//! is the UI layer plus the client-side permission model that decides what
//! to render.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
