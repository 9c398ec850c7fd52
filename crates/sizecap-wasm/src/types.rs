//! WASM-compatible wrapper types for image data and compression results.
//!
//! These types wrap the core Sizecap types and handle the conversion between
//! Rust and JavaScript data representations.

use sizecap_core::compress::Compressed;
use sizecap_core::decode::SourceImage;
use wasm_bindgen::prelude::*;

/// A decoded image wrapper for JavaScript.
///
/// Wraps the core `SourceImage` type and provides a JavaScript-friendly
/// interface for accessing image dimensions and pixel data.
///
/// # Memory Management
///
/// The pixel data lives in WASM memory. Calling `pixels()` copies it out to
/// JavaScript as a `Uint8Array`. The `free()` method releases WASM memory
/// explicitly; wasm-bindgen's finalizer handles cleanup otherwise.
#[wasm_bindgen]
pub struct JsSourceImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsSourceImage {
    /// Create a new JsSourceImage from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsSourceImage {
        JsSourceImage {
            width,
            height,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 3 for RGB)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGB pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsSourceImage {
    /// Create a JsSourceImage from a core SourceImage.
    pub(crate) fn from_source(img: SourceImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    /// Convert back to a core SourceImage.
    ///
    /// Note: This clones the pixel data.
    pub(crate) fn to_source(&self) -> SourceImage {
        SourceImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

/// A size-targeted compression result for JavaScript.
///
/// Carries the JPEG bytes, the quality factor they were encoded at, and
/// whether the requested size ceiling was actually met (`false` means the
/// search bottomed out at the quality floor and returned a best-effort,
/// over-target encoding).
#[wasm_bindgen]
pub struct JsCompressed {
    bytes: Vec<u8>,
    quality: u8,
    target_met: bool,
}

#[wasm_bindgen]
impl JsCompressed {
    /// Quality factor the returned bytes were encoded at
    #[wasm_bindgen(getter)]
    pub fn quality(&self) -> u8 {
        self.quality
    }

    /// Whether the output length fits the requested size ceiling
    #[wasm_bindgen(getter)]
    pub fn target_met(&self) -> bool {
        self.target_met
    }

    /// Output length in bytes
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.bytes.len()
    }

    /// Returns the JPEG bytes as Uint8Array.
    ///
    /// Note: This creates a copy, suitable for handing to a Blob for download.
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsCompressed {
    /// Create a JsCompressed from a core Compressed result.
    pub(crate) fn from_compressed(result: Compressed) -> Self {
        Self {
            bytes: result.bytes,
            quality: result.quality,
            target_met: result.target_met,
        }
    }
}
