#![allow(non_snake_case)]

pub mod api;
pub mod components;
pub mod utils;

mod app;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Route tracing events to the browser console
    tracing_wasm::set_as_global_default();
    tracing::info!("Starting Transcript Uploader frontend");

    // Remove loading placeholder
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(loader) = document.get_element_by_id("app-loading") {
                loader.remove();
            }
        }
    }

    leptos::mount::mount_to_body(app::App);
}
