#![allow(warnings)]
//! Menu Frontend Entry Point

mod logger;
mod browser;
mod storage;
mod deep_link;
mod context;
mod store;
mod hooks;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    mount_to_body(App);
}
