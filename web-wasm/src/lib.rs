//! People Counter Web App (Leptos + WASM)

mod api;
mod app;
mod browser;
mod components;
mod pages;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!("people counter web app starting");
    leptos::mount::mount_to_body(app::App);
}
