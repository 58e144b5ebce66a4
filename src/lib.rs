// ============================================================================
// MENGKE ADMIN CLIENT - services core for the lead-management SPA
// ============================================================================
// Layers:
// - services: session store, request pipeline, lead metadata cache
// - api: one thin wrapper per backend endpoint
// - router: route table + navigation guard
// - models: wire payloads
// - utils: storage backends, city/name helpers, constants
// ============================================================================

pub mod api;
pub mod error;
pub mod models;
pub mod router;
pub mod services;
pub mod utils;

pub use error::ApiError;
pub use services::{ApiClient, LeadMetaService, SessionStore};

/// Browser entry: panic hook + console logging, once per page load
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 Mengke Admin Client");
}
