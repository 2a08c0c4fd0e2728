//! # arena-client
//!
//! Leptos + WASM frontend for the Arena coding-challenge platform.
//!
//! The interesting part of this crate is the authentication-gated routing
//! flow: `net::session` owns the per-tab auth state with a short-lived
//! cache over the backend's cookie-session API, and `routes::guard` is
//! the decision procedure run before every transition onto a protected
//! route. Pages and components are thin render targets on top of those.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
