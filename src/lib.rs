//! Bass Tab Editor WASM Module
//!
//! Composes four-string bass tablature from fret and key input, formats it as
//! fixed-width tab lines, and exports the result to PNG or PDF.

pub mod api;
pub mod errors;
pub mod input;
pub mod models;
pub mod renderers;

// Re-export commonly used types
pub use errors::{ExportError, TabError};
pub use input::{InputEvent, InputOutcome, KeyCommand};
pub use models::*;
pub use renderers::tablature::{render_text, TabFormatter, TabSection};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            api::helpers::log_warn(&format!("logger already initialized: {}", e));
        }
    }

    log::info!("Bass tab editor WASM module initialized");
}
