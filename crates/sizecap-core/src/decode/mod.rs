//! Image decoding pipeline for Sizecap.
//!
//! This module provides functionality for:
//! - Decoding JPEG and PNG uploads into RGB bitmaps
//! - Flattening alpha channels (JPEG output has no transparency)
//! - EXIF orientation correction
//!
//! # Architecture
//!
//! Decoding is synchronous and single-threaded; each call owns its input
//! bytes for the duration of one request and leaves no shared state behind.
//! Formats other than JPEG and PNG are rejected up front rather than being
//! passed to the decoder, so the caller gets a stable error for unsupported
//! uploads.
//!
//! # Examples
//!
//! ```ignore
//! use sizecap_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.png").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod bitmap;
mod types;

pub use bitmap::{decode_image, decode_image_no_orientation, get_orientation};
pub use types::{DecodeError, Orientation, SourceImage};
