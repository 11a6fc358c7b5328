mod api;
mod components;
pub mod config;
mod pages;
mod router;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting BookMyAdvocate frontend");

    // Runtime config from env.js / config.json; requests wait for it.
    leptos::spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
    });

    router::mount_app();
}
