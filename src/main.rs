//! Storydesk Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod models;
mod pages;
mod permissions;
mod state;
mod store;

use app::App;
use leptos::prelude::*;
use tracing_subscriber::fmt;
use tracing_subscriber_wasm::MakeConsoleWriter;

fn main() {
    // Route tracing output to the browser console.
    fmt()
        .with_writer(MakeConsoleWriter::default().map_trace_level_to(tracing::Level::DEBUG))
        .without_time()
        .with_ansi(false)
        .init();
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
