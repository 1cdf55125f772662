//! # portal-ui
//!
//! Leptos + WASM front end for the portal pages: AJAX form submission with
//! flash messages, a persisted dark-mode switch, and a modal chat widget.
//!
//! Widget behavior lives in plain state types under `state` and `util`;
//! `components` only render them and wire DOM events, so everything except
//! the browser glue is testable natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already set: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
