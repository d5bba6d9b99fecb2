#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod device;
pub mod motion;
pub mod particles;
pub mod resume;
pub mod selection;
pub mod theme;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("couldn't install console logger: {e}");
    }
    leptos::mount::hydrate_body(App);
}
