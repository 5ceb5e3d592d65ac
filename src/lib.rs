//! LMS Portal - training portal client
//!
//! Role-scoped dashboards for admins, managers and employees on top of a
//! REST backend, built with Leptos and WebAssembly. The session layer
//! (token persistence, rehydration, request authorization and route
//! guarding) lives in [`core::session`].

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // With no subscriber installed, tracing events fall through to `log`
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("Console logger already installed");
    }
    leptos::mount::hydrate_body(App);
}
