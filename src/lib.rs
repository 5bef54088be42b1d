//! Medilens - sign-in client
//!
//! The sign-in screen of the Medilens web application,
//! built with Leptos and WebAssembly.
#![recursion_limit = "256"]

pub mod app;
pub mod core;
#[cfg(feature = "ssr")]
pub mod server;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
