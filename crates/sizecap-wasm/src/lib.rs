//! Sizecap WASM - WebAssembly bindings for Sizecap
//!
//! This crate exposes the sizecap-core functionality to JavaScript/TypeScript
//! applications. Each exported function is a stateless, per-request unit of
//! work: the browser page hands over upload bytes and a target size, and gets
//! back size-capped JPEG bytes plus the quality factor used.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data and results
//! - `decode` - Image decoding bindings (JPEG/PNG)
//! - `encode` - Single-pass JPEG encoding bindings
//! - `compress` - Size-targeted compression bindings
//! - `naming` - Download filename composition
//!
//! # Usage
//!
//! ```typescript
//! import init, { compress_to_target } from '@sizecap/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const result = compress_to_target(bytes, 0.9);
//! console.log(`Quality ${result.quality}, ${result.byte_length} bytes`);
//! ```

use wasm_bindgen::prelude::*;

mod compress;
mod decode;
mod encode;
mod naming;
mod types;

// Re-export public types
pub use compress::{
    compress_to_target, compress_with_options, compress_with_options_object, target_mb_max,
    target_mb_min, TARGET_MB_MAX, TARGET_MB_MIN,
};
pub use decode::decode_image;
pub use encode::{encode_jpeg, encode_jpeg_from_image};
pub use naming::{custom_filename, default_custom_stem, preset_filename};
pub use types::{JsCompressed, JsSourceImage};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
