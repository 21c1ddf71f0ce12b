#![recursion_limit = "256"]

//! # client
//!
//! Leptos UI layer for the ONE GOAL job-application tracker: shared form and
//! feedback components, navigation chrome, deterministic date formatting, and
//! the routed app shell rendered by the `onegoal` SSR host and hydrated in the
//! browser.

pub mod app;
pub mod components;
pub mod pages;
pub mod util;

/// WASM entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Logging is best effort; a second init in the same page is harmless.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
