//! # site
//!
//! Leptos + WASM frontend for the Fraido single-page site.
//!
//! The page is server-rendered by the root `fraido` binary and hydrated in the
//! browser. This crate contains the shell, the page, its section components,
//! presentation state (navigation, cookie consent, video cards), and the
//! static content the sections render. The diameter illustration delegates
//! its interaction and geometry to the `tube` crate.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("hydrating fraido site");
    leptos::mount::hydrate_body(app::App);
}
