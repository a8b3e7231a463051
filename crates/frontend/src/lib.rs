pub mod app;
pub mod domain;
pub mod routes;
pub mod shared;

use leptos::prelude::*;
use shared::config::{self, FrontendConfig};
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let loaded = config::load_config();
    let level = loaded
        .as_ref()
        .map(FrontendConfig::log_level)
        .unwrap_or(log::Level::Debug);

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("{e}; using default configuration");
        FrontendConfig::default()
    });

    leptos::mount::mount_to_body(move || view! { <app::App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
