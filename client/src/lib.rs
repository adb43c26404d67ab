//! # client
//!
//! Leptos + WASM single-page front end for the comment feed demo.
//!
//! This crate contains the page, components, browser-side state, and the
//! `gloo-net` transport. Session and feed behavior live in the `feed` crate;
//! here they are bound to Leptos signals and rendered.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and mounts [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
