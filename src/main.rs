//! Todo Master Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod logger;
mod models;
mod query;
mod service;
mod session;
mod stats;
mod view_model;

#[cfg(test)]
mod test_support;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    mount_to_body(App);
}
