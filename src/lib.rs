//! # portfolio-page
//!
//! Leptos + WASM client for a personal portfolio page.
//!
//! The page's widgets (video modal, skills "read more" label, mobile skill
//! viewer) are driven by a single `ViewStateController`. Components render
//! their inline styles from the controller's `PageView`, and the embedded
//! YouTube player is reached through the `player` seam so the controller is
//! testable without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod player;
pub mod state;
pub mod util;

/// WASM entry point: install logging, mount the app into `<body>`, and
/// verify the regions the controller drives are present.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
    }

    leptos::mount::mount_to_body(app::App);

    let mount_id = config::PageConfig::default().player_mount_id;
    match util::regions::check_document(&mount_id) {
        Ok(()) => log::info!("page: mounted"),
        Err(err) => log::error!("page: {err}"),
    }
}
