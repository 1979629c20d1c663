pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    run();
}

/// Boots the client: panic hook, console logging, runtime config, then the
/// router is mounted to the document body.
pub fn run() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("starting Crescendo frontend");

    // Config load is non-blocking; window globals (env.js) take precedence
    // over the fetched config.json.
    leptos::spawn_local(async move {
        config::init().await;
        log::info!("runtime config initialized");
        router::mount_app();
    });
}
