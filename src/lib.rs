//! # be4breach-web
//!
//! Leptos + WASM frontend for the Be4Breach marketing site and role-gated
//! dashboards. The backend REST API is external; this crate is purely a
//! client: marketing pages, a credential/SSO login portal, and user/admin
//! dashboards behind an exact-match role guard.
//!
//! The auth layer (session store, local JWT claims decoding, the auth
//! state machine, and the role guard) lives in `state::auth`,
//! `util::{session_store, jwt}`, and `components::role_guard`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
