//! Download filename WASM bindings.
//!
//! Thin wrappers over the core naming policy so the frontend composes the
//! same filenames the download button offers.

use sizecap_core::naming;
use wasm_bindgen::prelude::*;

/// Compose the preset filename: `{name}_BasicCO25_{suffix}.jpg`.
#[wasm_bindgen]
pub fn preset_filename(name: &str, suffix: &str) -> String {
    naming::preset_filename(name, suffix)
}

/// Compose a custom filename from a user-typed stem, appending `.jpg`.
#[wasm_bindgen]
pub fn custom_filename(stem: &str) -> String {
    naming::custom_filename(stem)
}

/// Default custom stem for an upload: original filename minus extension,
/// with `_compressed` appended.
#[wasm_bindgen]
pub fn default_custom_stem(original_name: &str) -> String {
    naming::default_custom_stem(original_name)
}
