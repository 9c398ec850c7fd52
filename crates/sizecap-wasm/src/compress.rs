//! Size-targeted compression WASM bindings.
//!
//! This module exposes the sizecap-core compression loop to JavaScript.
//! Each call is an independent, stateless request: upload bytes and a target
//! size in, size-capped JPEG bytes and the quality factor used out.
//!
//! # Functions
//!
//! - [`compress_to_target`] - Compress with the default search parameters
//! - [`compress_with_options`] - Compress with explicit search parameters
//!
//! # Example
//!
//! ```typescript
//! import { compress_to_target } from '@sizecap/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const result = compress_to_target(bytes, 0.9);
//!
//! if (!result.target_met) {
//!   console.warn('Returned lowest-quality encoding, still over target');
//! }
//! const blob = new Blob([result.bytes()], { type: 'image/jpeg' });
//! ```

use crate::types::JsCompressed;
use sizecap_core::compress::{compress_bytes, mb_to_bytes};
use sizecap_core::CompressOptions;
use wasm_bindgen::prelude::*;

/// Smallest target size the frontend slider offers, in megabytes.
pub const TARGET_MB_MIN: f64 = 0.1;

/// Largest target size the frontend slider offers, in megabytes.
pub const TARGET_MB_MAX: f64 = 5.0;

/// Smallest target size the frontend slider should offer, in megabytes.
#[wasm_bindgen]
pub fn target_mb_min() -> f64 {
    TARGET_MB_MIN
}

/// Largest target size the frontend slider should offer, in megabytes.
#[wasm_bindgen]
pub fn target_mb_max() -> f64 {
    TARGET_MB_MAX
}

/// Compress an uploaded image to fit under a target size in megabytes.
///
/// Decodes the upload (JPEG or PNG, alpha flattened, EXIF orientation
/// applied) and runs the quality step-down search with the default
/// parameters: start at quality 75, step down by 5, floor at 10.
///
/// # Arguments
///
/// * `bytes` - Raw upload bytes as a `Uint8Array`
/// * `target_mb` - Size ceiling in megabytes (the slider uses 0.1 - 5.0)
///
/// # Returns
///
/// A `JsCompressed` with the JPEG bytes and the quality factor used. If even
/// the floor quality overshoots the target, the floor encoding is returned
/// with `target_met == false` rather than an error.
///
/// # Errors
///
/// Returns an error if the bytes are not a readable JPEG/PNG or if encoding
/// fails.
#[wasm_bindgen]
pub fn compress_to_target(bytes: &[u8], target_mb: f64) -> Result<JsCompressed, JsValue> {
    let target = mb_to_bytes(target_mb);
    compress_bytes(bytes, target, &CompressOptions::default())
        .map(JsCompressed::from_compressed)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Compress an uploaded image with explicit search parameters.
///
/// Like [`compress_to_target`], but the target is given in bytes and the
/// quality search grid is caller-controlled.
///
/// # Arguments
///
/// * `bytes` - Raw upload bytes as a `Uint8Array`
/// * `target_size_bytes` - Size ceiling in bytes
/// * `initial_quality` - Quality factor tried first
/// * `quality_floor` - Lowest quality factor before giving up on the target
/// * `quality_step` - Decrement between search iterations
#[wasm_bindgen]
pub fn compress_with_options(
    bytes: &[u8],
    target_size_bytes: u64,
    initial_quality: u8,
    quality_floor: u8,
    quality_step: u8,
) -> Result<JsCompressed, JsValue> {
    let options = CompressOptions {
        initial_quality,
        quality_floor,
        quality_step,
    };
    compress_bytes(bytes, target_size_bytes, &options)
        .map(JsCompressed::from_compressed)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Compress an uploaded image with search parameters given as a JS object.
///
/// Like [`compress_with_options`], but the parameters arrive as one object
/// (`{ initial_quality, quality_floor, quality_step }`), deserialized into
/// the core options type. Convenient for frontends that keep the search
/// settings in a single piece of state.
///
/// # Example
///
/// ```typescript
/// const result = compress_with_options_object(bytes, 900 * 1024, {
///   initial_quality: 75,
///   quality_floor: 10,
///   quality_step: 5,
/// });
/// ```
#[wasm_bindgen]
pub fn compress_with_options_object(
    bytes: &[u8],
    target_size_bytes: u64,
    options: JsValue,
) -> Result<JsCompressed, JsValue> {
    let options: CompressOptions =
        serde_wasm_bindgen::from_value(options).map_err(JsValue::from)?;
    compress_bytes(bytes, target_size_bytes, &options)
        .map(JsCompressed::from_compressed)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
