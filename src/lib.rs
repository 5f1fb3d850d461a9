//! Interval Identifier WASM Module
//!
//! Names the interval between two notes ("C" and "Eb" is a Minor Third),
//! voices it in scientific pitch notation and selects audio samples for
//! playback. The engine in `models` and `parse` is plain Rust; `api` wraps it
//! for JavaScript.

pub mod api;
pub mod errors;
pub mod models;
pub mod parse;
pub mod renderers;

// Re-export commonly used types
pub use errors::{IntervalError, Result};
pub use models::*;
pub use parse::note::{validate_note, validate_notes, NoteValidation};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("[WASM] logger already initialized: {}", e).into());
    }

    log::info!("Interval Identifier WASM module initialized");
}
