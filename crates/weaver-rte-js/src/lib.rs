//! WASM bindings for the weaver rich-text editor.
//!
//! Exposes `RichTextEditor`, which upgrades a textarea or a content element
//! into a visual/HTML-source editor with a toolbar.

mod editor;
mod types;

pub use editor::*;
pub use types::*;

use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Route `tracing` output to the browser console.
///
/// Debug builds log at DEBUG, release builds at INFO. Calling this more
/// than once is harmless.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    use tracing::Level;
    use tracing::subscriber::set_global_default;
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    let console_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(console_level)
            .build(),
    );

    let _ = set_global_default(Registry::default().with(wasm_layer));
}
