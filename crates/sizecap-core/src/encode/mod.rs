//! JPEG encoding for Sizecap.
//!
//! This module provides a single encode pass at a fixed quality factor; the
//! size-targeting search in [`crate::compress`] drives it repeatedly with
//! decreasing quality until the output fits the requested ceiling.
//!
//! # Examples
//!
//! ```ignore
//! use sizecap_core::encode::encode_jpeg;
//!
//! let pixels = vec![128u8; 100 * 100 * 3]; // Gray image
//! let jpeg_bytes = encode_jpeg(&pixels, 100, 100, 75).unwrap();
//! println!("Encoded {} bytes", jpeg_bytes.len());
//! ```

mod jpeg;

pub use jpeg::{encode_jpeg, EncodeError};
