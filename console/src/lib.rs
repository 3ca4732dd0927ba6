//! # console
//!
//! Leptos + WASM management console for a RADIUS authentication service.
//! Talks to the management API over JSON, persists the operator session in
//! namespaced browser storage, and supports deployment behind a
//! reverse-proxy sub-path.
//!
//! This crate contains pages, components, application state, the typed API
//! client, and the browser-storage cache. Everything browser-specific sits
//! behind the `csr` feature so the whole model layer tests on the host.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(feature = "csr")]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
