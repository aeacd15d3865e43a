// =============================================================================
// Scenario Web - Main Library Entry Point
// =============================================================================
// Table of Contents:
// 1. Module Declarations
// 2. Re-exports
// 3. Application Shell
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Module Declarations
// -----------------------------------------------------------------------------

pub mod api;
pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod utils;

// -----------------------------------------------------------------------------
// 2. Re-exports
// -----------------------------------------------------------------------------

pub use app::App;
pub use state::{AppState, SignalState, WebStore};

// -----------------------------------------------------------------------------
// 3. Application Shell
// -----------------------------------------------------------------------------

use leptos::prelude::*;
use scenario_common::{ClientConfig, Route, ScenarioStore};
use wasm_bindgen::prelude::wasm_bindgen;

use crate::api::ApiClient;

/// Console log level: everything in debug builds, warnings and up in release.
pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Warn
    }
}

/// Bootstrap the app and mount it to the document body.
///
/// Steps run in a fixed order: panic hook, console logger, API client and
/// store, then the root view. A mount failure panics and is reported by the
/// panic hook.
#[wasm_bindgen]
pub fn mount() {
    console_error_panic_hook::set_once();
    // Ignore if already initialized by a previous mount
    let _ = console_log::init_with_level(log_level());

    let config = ClientConfig::from_build_env();
    log::info!("Mounting Scenario Studio (API: {})", config.api_base_url);

    let path = utils::pathname();
    match Route::from_path(&path) {
        Some(route) => log::debug!("Initial route {} ({})", route.name(), path),
        None => log::warn!("No route matches initial path {}", path),
    }

    leptos::mount::mount_to_body(move || {
        let store = ScenarioStore::new(ApiClient::new(config.clone()), SignalState::new());
        view! { <App store=store /> }
    });
}
