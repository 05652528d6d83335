//! Voice Ingredient List Manager Entry Point

mod app;
mod components;
mod context;
mod print;
mod speech;
mod storage;
mod store;

use app::App;
use ingredient_lists_core::AppConfig;
use leptos::prelude::*;

use crate::storage::BrowserStorage;

fn main() {
    std::panic::set_hook(Box::new(|info| {
        // Fails harmlessly if the panic happens before the logger is installed
        let _ = rolling_logger::error(&format!("[APP] Panic: {}", info));
        console_error_panic_hook::hook(info);
    }));

    let config = AppConfig::load(&BrowserStorage);
    match rolling_logger::init_logger("ingredient-lists", config.log_capacity) {
        Ok(()) => log::info!("[APP] Starting with storage key {:?}", config.storage_key),
        Err(e) => {
            web_sys::console::warn_1(&format!("[APP] Logger unavailable: {}", e).into());
        }
    }

    mount_to_body(move || view! { <App config=config /> });
}
