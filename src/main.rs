//! Shopping List Frontend Entry Point

mod app;
mod components;
mod context;
mod logging;
mod store;

use app::App;
use leptos::prelude::*;
use shopping_list_core::ListConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = ListConfig::default();
    logging::init(config.log_level);
    log::info!("[APP] starting shopping list");

    mount_to_body(move || view! { <App config=config /> });
}
