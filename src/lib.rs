//! # pandarank-web
//!
//! Leptos + WASM front end for the PandaRank influencer-campaign platform.
//!
//! This crate contains the route table, theme, pages, components, the REST
//! layer, and the browser session (bearer token in `localStorage`). Build with
//! `hydrate` for the browser bundle and `ssr` for the host binary.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod session;
pub mod state;
pub mod theme;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init only fails when a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
