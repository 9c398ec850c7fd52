//! Image decoding WASM bindings.
//!
//! This module exposes the sizecap-core decoding function to JavaScript,
//! mainly so the frontend can show upload dimensions and a preview without
//! running a full compression.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image } from '@sizecap/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! console.log(`Decoded ${image.width}x${image.height} image`);
//! ```

use crate::types::JsSourceImage;
use sizecap_core::decode;
use wasm_bindgen::prelude::*;

/// Decode a JPEG or PNG upload.
///
/// Applies EXIF orientation correction and flattens any alpha channel, so the
/// returned pixels are always opaque RGB (3 bytes per pixel).
///
/// # Arguments
///
/// * `bytes` - The raw upload bytes as a `Uint8Array`
///
/// # Errors
///
/// Returns an error if:
/// - The bytes are not a JPEG or PNG container
/// - The data is corrupted or truncated
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsSourceImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsSourceImage::from_source)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
