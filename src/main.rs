#![allow(warnings)]
//! Cuisine Menu Frontend Entry Point

mod config;
mod logger;
mod context;
mod store;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    let config = AppConfig::load();
    log::set_max_level(config.level_filter().unwrap_or(log::LevelFilter::Info));
    log::info!("[APP] starting {}", config.title);

    mount_to_body(move || view! { <App config=config /> });
}
