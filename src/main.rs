#![allow(warnings)]
//! Todo List Frontend Entry Point

mod models;
mod todo_list;
mod storage;
mod config;
mod view;
mod controller;
mod context;
mod components;
mod app;

use app::App;
use config::TodoConfig;
use leptos::prelude::*;

fn main() {
    let config = TodoConfig::default();
    if let Err(e) = rolling_logger::init(config.log_level, config.log_capacity) {
        web_sys::console::warn_1(&format!("[APP] Logger already installed: {}", e).into());
    }
    console_error_panic_hook::set_once();
    mount_to_body(move || view! { <App config=config /> });
}
