//! Size-targeted compression: the quality step-down search.
//!
//! Given a decoded bitmap and a byte ceiling, the search encodes at
//! decreasing JPEG quality factors until the output fits or the quality
//! floor is reached. JPEG output size is in practice monotonically
//! non-decreasing in quality for a fixed image, so a linear scan from high
//! to low quality is sufficient; with the default parameters (75 down to 10
//! in steps of 5) that is at most 14 encode passes. A bisection search would
//! save a few passes but is not worth the complexity here.
//!
//! When even the floor quality overshoots the ceiling, the floor encoding is
//! returned successfully with [`Compressed::target_met`] set to `false`.
//! Unreachable targets are a best-effort outcome, not an error.

use thiserror::Error;

use crate::decode::{decode_image, DecodeError, SourceImage};
use crate::encode::{encode_jpeg, EncodeError};
use crate::CompressOptions;

/// Bytes in one binary megabyte, the unit the size slider works in.
pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// Errors from the bytes-in/bytes-out compression path.
#[derive(Debug, Error)]
pub enum CompressError {
    /// The upload could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Re-encoding failed.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// The outcome of a size-targeted compression.
#[derive(Debug, Clone)]
pub struct Compressed {
    /// JPEG-encoded output.
    pub bytes: Vec<u8>,
    /// Quality factor the returned bytes were encoded at.
    pub quality: u8,
    /// Whether `bytes.len()` actually fits the requested ceiling.
    ///
    /// `false` means the search hit the quality floor while still over
    /// target and the floor encoding was returned best-effort.
    pub target_met: bool,
}

impl Compressed {
    /// Output length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True if the output is empty (never the case for a successful encode).
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Convert a size expressed in megabytes to a byte ceiling.
///
/// Uses binary megabytes (1 MB = 1,048,576 bytes), matching how the size
/// slider's numbers are displayed. Negative and NaN inputs clamp to zero.
pub fn mb_to_bytes(mb: f64) -> u64 {
    if mb.is_nan() || mb <= 0.0 {
        return 0;
    }
    (mb * BYTES_PER_MB as f64) as u64
}

/// Compress a decoded bitmap to fit under `target_size_bytes`.
///
/// Runs the quality step-down search: encode at `options.initial_quality`,
/// and while the output is over target and the quality factor is above
/// `options.quality_floor`, lower the quality by `options.quality_step` and
/// re-encode. The quality factor is clamped at the floor, so the returned
/// quality always lies on the grid `initial - k * step` within
/// `[floor, initial]`.
///
/// The input image is not mutated; each pass produces a fresh encode buffer
/// and oversized intermediates are discarded.
///
/// # Errors
///
/// Returns `EncodeError` only if an encode pass itself fails. An unreachable
/// target is not an error (see [`Compressed::target_met`]).
pub fn compress_to_size(
    image: &SourceImage,
    target_size_bytes: u64,
    options: &CompressOptions,
) -> Result<Compressed, EncodeError> {
    // A zero step would never terminate
    let step = options.quality_step.max(1);
    let floor = options.quality_floor;

    let mut quality = options.initial_quality;

    loop {
        let bytes = encode_jpeg(&image.pixels, image.width, image.height, quality)?;

        let fits = bytes.len() as u64 <= target_size_bytes;
        if fits || quality <= floor {
            return Ok(Compressed {
                bytes,
                quality,
                target_met: fits,
            });
        }

        // Clamp at the floor so the last attempt is exactly floor quality
        // even when the step does not divide the range evenly
        quality = quality.saturating_sub(step).max(floor);
    }
}

/// Decode an upload and compress it to fit under `target_size_bytes`.
///
/// Convenience path covering the whole request: raw JPEG/PNG bytes in,
/// size-capped JPEG bytes out.
///
/// # Errors
///
/// Returns `CompressError::Decode` if the bytes are not a readable JPEG or
/// PNG, and `CompressError::Encode` if re-encoding fails.
pub fn compress_bytes(
    input: &[u8],
    target_size_bytes: u64,
    options: &CompressOptions,
) -> Result<Compressed, CompressError> {
    let image = decode_image(input)?;
    let result = compress_to_size(&image, target_size_bytes, options)?;
    Ok(result)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
