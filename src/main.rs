//! Storefront Frontend Entry Point

mod commands;
mod gateway;
mod session;
mod logger;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Debug);
    mount_to_body(App);
}
