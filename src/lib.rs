pub mod catalog;
pub mod common;
pub mod config;
pub mod frontend;
pub mod loading;
pub mod models;
pub mod services;
pub mod types;

/// WASM entry point for the client bundle
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(frontend::App);
}
