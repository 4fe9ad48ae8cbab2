#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod banner;
pub mod bootstrap;
pub mod bridge;
pub mod components;
pub mod dom;
pub mod home_button;
pub mod logging;
pub mod overlay;
pub mod paths;
pub mod promo;
pub mod scheduler;
pub mod sound;
pub mod storage;
pub mod styles;
pub mod transition;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    let search = dom::window()
        .and_then(|win| win.location().search().ok())
        .unwrap_or_default();
    logging::init(logging::level_from_query(&search));
    if let Err(err) = bootstrap::start() {
        log::error!("homeward install failed: {err:#}");
    }
}

/// Remove everything `start` installed.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn stop() {
    bootstrap::stop();
}
