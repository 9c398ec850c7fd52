//! Single-pass JPEG encoding WASM bindings.
//!
//! Exposes the raw encoder underneath the compression loop, for frontends
//! that want a one-shot encode at a known quality instead of a size search.
//!
//! # Example
//!
//! ```typescript
//! import { encode_jpeg } from '@sizecap/wasm';
//!
//! const jpegBytes = encode_jpeg(pixels, width, height, 75);
//! ```

use crate::types::JsSourceImage;
use sizecap_core::encode;
use wasm_bindgen::prelude::*;

/// Encode RGB pixel data to JPEG bytes at a fixed quality factor.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data as a `Uint8Array` (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - JPEG quality factor (clamped to 1-100)
///
/// # Errors
///
/// Returns an error if:
/// - The pixel data length doesn't match width * height * 3
/// - Width or height is zero
/// - Encoding fails internally
#[wasm_bindgen]
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(pixels, width, height, quality)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a decoded image to JPEG bytes at a fixed quality factor.
///
/// Convenience wrapper for images already decoded via `decode_image`.
#[wasm_bindgen]
pub fn encode_jpeg_from_image(image: &JsSourceImage, quality: u8) -> Result<Vec<u8>, JsValue> {
    let src = image.to_source();
    encode::encode_jpeg(&src.pixels, src.width, src.height, quality)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
