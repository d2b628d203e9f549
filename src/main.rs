//! Wishlist Frontend Entry Point

mod models;
mod session;
mod config;
mod api;
mod modal;
mod form;
mod view;
mod context;
mod store;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use tracing::Level;
use tracing_subscriber_wasm::MakeConsoleWriter;

fn init_logging(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        // Keep trace events from printing their JS backtrace
        .with_writer(MakeConsoleWriter::default().map_trace_level_to(Level::DEBUG))
        // No clock in the browser
        .without_time()
        .with_ansi(false)
        .init();
}

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_window();
    init_logging(config.log_level);
    tracing::info!("wishlist ui starting, api at {}", config.api_base);

    mount_to_body(move || view! { <App config=config /> });
}
