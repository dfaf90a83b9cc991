//! # userportal
//!
//! Leptos + WASM front-end shell for the Woodgrove Bank user portal.
//!
//! This crate contains the root `App` component (header, theme switch,
//! sign-out), the login and authenticated shell pages, the shared client
//! state, and the preference store that persists the light/dark theme in a
//! browser cookie.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/log hooks and mounts `App` on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let config = config::ShellConfig::from_build_env();
    let level = config
        .as_ref()
        .map_or(config::DEFAULT_LOG_LEVEL, |c| c.log_level);
    // Only fails when a logger is already installed; that logger stays in use.
    if let Err(e) = console_log::init_with_level(level) {
        log::warn!("console logger not installed: {e}");
    }

    let config = config.unwrap_or_else(|e| {
        log::warn!("invalid build-time portal config, using defaults: {e}");
        config::ShellConfig::default()
    });

    log::info!("userportal mounting (brand: {})", config.brand_name);
    leptos::mount::mount_to_body(move || view! { <app::App config=config/> });
}
