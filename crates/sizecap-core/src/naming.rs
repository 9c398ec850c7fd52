//! Download filename policy.
//!
//! Pure string composition for the two naming modes the frontend offers:
//! a preset template and a free-form custom name. Nothing here affects
//! compression.

/// Fixed infix used by the preset filename template.
pub const PRESET_INFIX: &str = "BasicCO25";

/// Extension applied to every download; output is always JPEG.
pub const OUTPUT_EXTENSION: &str = "jpg";

/// Compose the preset filename: `{name}_BasicCO25_{suffix}.jpg`.
pub fn preset_filename(name: &str, suffix: &str) -> String {
    format!("{name}_{PRESET_INFIX}_{suffix}.{OUTPUT_EXTENSION}")
}

/// Compose a custom filename from a user-typed stem, appending `.jpg`.
pub fn custom_filename(stem: &str) -> String {
    format!("{stem}.{OUTPUT_EXTENSION}")
}

/// Default custom stem for an upload: the original filename minus its
/// extension, with `_compressed` appended.
pub fn default_custom_stem(original_name: &str) -> String {
    let base = match original_name.rsplit_once('.') {
        // A leading dot (e.g. ".bashrc") is a hidden-file name, not an extension
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => original_name,
    };
    format!("{base}_compressed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_filename() {
        assert_eq!(
            preset_filename("FUNG_HeiLongAdriel", "MS"),
            "FUNG_HeiLongAdriel_BasicCO25_MS.jpg"
        );
    }

    #[test]
    fn test_preset_filename_empty_fields() {
        assert_eq!(preset_filename("", ""), "_BasicCO25_.jpg");
    }

    #[test]
    fn test_custom_filename() {
        assert_eq!(custom_filename("holiday_photo"), "holiday_photo.jpg");
    }

    #[test]
    fn test_default_custom_stem() {
        assert_eq!(default_custom_stem("beach.png"), "beach_compressed");
        assert_eq!(default_custom_stem("photo.JPEG"), "photo_compressed");
    }

    #[test]
    fn test_default_custom_stem_no_extension() {
        assert_eq!(default_custom_stem("scan"), "scan_compressed");
    }

    #[test]
    fn test_default_custom_stem_multiple_dots() {
        // Only the last extension is stripped
        assert_eq!(
            default_custom_stem("trip.2024.jpg"),
            "trip.2024_compressed"
        );
    }

    #[test]
    fn test_default_custom_stem_hidden_file() {
        assert_eq!(default_custom_stem(".config"), ".config_compressed");
    }
}
