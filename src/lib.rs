//! # tuneshelf
//!
//! Leptos + WASM navigation shell for the music recommendation app.
//!
//! The crate's core is a headless menu controller (`menu`) that owns the
//! open/closed state of the collapsible navigation panel. It reaches the page
//! only through the [`menu::MenuDom`] capability, so the same state machine
//! runs against the real browser DOM under the `hydrate` feature and against
//! an in-memory tree in native tests.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod menu;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Warn };
    let _ = console_log::init_with_level(level);
    leptos::mount::hydrate_body(app::App);
}
