//! # campus-portal
//!
//! Leptos + WASM frontend for the college directory.
//!
//! This crate owns the authentication session lifecycle (token acquisition,
//! storage, refresh, expiry recovery), the request authenticator shared by the
//! REST clients, and the navigation guard that routing consults before showing
//! a protected page. Pages are a thin shell over those pieces.

pub mod app;
pub mod config;
pub mod guard;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the root component.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
