#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod fetch;
mod frame;
mod hero;
mod menu;
mod overlay;
mod render;
mod scrolly;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cafe-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Each feature owns its own context and degrades on its own; one failing
/// never stops the others.
async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    spawn_local(menu::init(document.clone()));

    if let Err(e) = scrolly::init(&document) {
        log::error!("[scrolly] disabled: {:#}", e);
    }

    let hero_doc = document.clone();
    spawn_local(async move {
        if let Err(e) = hero::init(hero_doc).await {
            log::error!("An error happened while loading the model: {:#}", e);
        }
    });
    Ok(())
}
