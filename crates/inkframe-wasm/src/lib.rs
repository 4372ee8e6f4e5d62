//! Inkframe WASM - WebAssembly bindings for the e-paper codec
//!
//! This crate exposes inkframe-core to the layout editor, so the browser can
//! preview exactly the gray levels the panel will show and produce framed
//! payloads without a round-trip to the server.
//!
//! # Module Structure
//!
//! - `types` - JS wrappers for grayscale and packed images
//! - `decode` - Decoding and resizing
//! - `histogram` - Tone statistics and derived adjustment parameters
//! - `convert` - The full pipeline, dithering preview and wire frames
//! - `logging` - Console backend for the `log` facade
//!
//! # Usage
//!
//! ```typescript
//! import init, { convert_bytes } from '@inkframe/wasm';
//!
//! await init();
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const packed = convert_bytes(bytes, { width: 300, height: 300 });
//! await fetch('/display', { method: 'POST', body: packed.frame() });
//! ```

use wasm_bindgen::prelude::*;

mod convert;
mod decode;
mod histogram;
mod logging;
mod types;

pub use convert::{
    convert, convert_bytes, convert_with_options, default_options, dither, parse_frame,
};
pub use decode::{decode_gray, resize, resize_to_fit};
pub use histogram::{analyze, derive_adjustments, JsToneStatistics};
pub use logging::init_logging;
pub use types::{JsGrayImage, JsPackedImage};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Panics show up in the console with a Rust backtrace
    console_error_panic_hook::set_once();
    logging::init_logging("warn");
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
