//! Aprende a Programar - lead capture landing page
//!
//! A single landing page that offers a free PDF in exchange for an email,
//! built with Leptos and WebAssembly. The interactive behaviour lives in
//! `core` as plain state machines; `ui` binds them to the DOM.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::logging::log!("🚀 Landing page cargada");
    leptos::mount::hydrate_body(App);
}
