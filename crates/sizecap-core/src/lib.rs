//! Sizecap Core - Size-targeted JPEG compression library
//!
//! This crate provides the core functionality for Sizecap: decoding JPEG/PNG
//! uploads, re-encoding them as JPEG, and searching for the highest quality
//! factor whose output fits under a caller-chosen size ceiling.

pub mod compress;
pub mod decode;
pub mod encode;
pub mod naming;

pub use compress::{compress_bytes, compress_to_size, mb_to_bytes, CompressError, Compressed};
pub use naming::{custom_filename, default_custom_stem, preset_filename};

/// Parameters controlling the quality step-down search.
///
/// The search starts at `initial_quality` and lowers the quality factor by
/// `quality_step` after every oversized encode, giving up on the size target
/// once `quality_floor` is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CompressOptions {
    /// Quality factor tried first (1-100)
    pub initial_quality: u8,
    /// Lowest quality factor the search will try before giving up on the target
    pub quality_floor: u8,
    /// Decrement applied to the quality factor between iterations
    pub quality_step: u8,
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self {
            initial_quality: 75,
            quality_floor: 10,
            quality_step: 5,
        }
    }
}

impl CompressOptions {
    /// Create options with the default search parameters (75 down to 10, step 5)
    pub fn new() -> Self {
        Self::default()
    }

    /// Upper bound on the number of encode passes the search can make.
    ///
    /// The quality factor strictly decreases each iteration and the floor is
    /// checked every pass, so the search runs at most
    /// ceil((initial - floor) / step) + 1 encodes.
    pub fn max_passes(&self) -> u32 {
        let step = u32::from(self.quality_step.max(1));
        let range = u32::from(self.initial_quality.saturating_sub(self.quality_floor));
        range.div_ceil(step) + 1
    }
}
