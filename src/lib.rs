//! # canine
//!
//! Leptos + WASM front-end for an online compiler service.
//!
//! The crate builds twice: with `hydrate` as the browser bundle, and with
//! `ssr` as the Axum server that renders the shell and serves that bundle.
//! The browser loads the compiler list once, then composes the header,
//! toolchain sidebar, editor, command bar, and result panel around it.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod server;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
