pub mod app;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    app::on_document_ready(|| {
        app::boot();
    });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
