//! # ctpn-client
//!
//! Leptos + WASM frontend for the community-support platform.
//!
//! This crate contains the session and authorization layer (session store,
//! auth context, route guards, authenticated fetch) together with the pages
//! and components that sit on top of it. Browser-only code lives behind the
//! `csr` feature; everything else is plain Rust and tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: wire up panics and logging, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(config::log_level());
    leptos::mount::mount_to_body(app::App);
}
