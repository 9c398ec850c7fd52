//! JPEG/PNG decoding with alpha flattening and EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageFormat, ImageReader};

use super::{DecodeError, Orientation, SourceImage};

/// Decode a JPEG or PNG upload into an opaque RGB bitmap.
///
/// The container format is sniffed from the bytes; anything other than JPEG
/// or PNG is rejected before decoding. EXIF orientation correction is
/// applied, and any alpha channel is flattened by dropping the alpha samples
/// and keeping the color samples as-is.
///
/// # Arguments
///
/// * `bytes` - Raw image file bytes
///
/// # Returns
///
/// A `SourceImage` with RGB pixel data and correct orientation applied.
///
/// # Errors
///
/// Returns `DecodeError::UnsupportedFormat` if the bytes are not a JPEG or
/// PNG container. Returns `DecodeError::CorruptedFile` if the data is
/// unreadable.
pub fn decode_image(bytes: &[u8]) -> Result<SourceImage, DecodeError> {
    // Extract EXIF orientation before decoding (the decoder drops metadata)
    let orientation = extract_orientation(bytes);

    let img = decode_container(bytes)?;

    let oriented_img = apply_orientation(img, orientation);

    Ok(flatten_alpha(oriented_img))
}

/// Decode a JPEG or PNG upload without applying EXIF orientation.
///
/// Use this when the caller handles orientation separately or the image is
/// already correctly oriented.
pub fn decode_image_no_orientation(bytes: &[u8]) -> Result<SourceImage, DecodeError> {
    let img = decode_container(bytes)?;
    Ok(flatten_alpha(img))
}

/// Extract the EXIF orientation value from image bytes (for external use).
///
/// Returns `Orientation::Normal` if no EXIF data is found or the orientation
/// cannot be determined.
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    extract_orientation(bytes)
}

/// Sniff the container format and decode, accepting only JPEG and PNG.
fn decode_container(bytes: &[u8]) -> Result<DynamicImage, DecodeError> {
    let cursor = Cursor::new(bytes);
    let reader = ImageReader::new(cursor)
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    match reader.format() {
        Some(ImageFormat::Jpeg) | Some(ImageFormat::Png) => {}
        _ => return Err(DecodeError::UnsupportedFormat),
    }

    reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))
}

/// Flatten any alpha channel to an opaque three-channel bitmap.
///
/// JPEG has no alpha channel, so RGBA/LA inputs must lose theirs before
/// encoding. The alpha samples are dropped and the color samples kept as-is;
/// no compositing against a background color is performed. Fully transparent
/// pixels therefore keep whatever color the file stored for them.
fn flatten_alpha(img: DynamicImage) -> SourceImage {
    SourceImage::from_rgb_image(img.into_rgb8())
}

fn extract_orientation(bytes: &[u8]) -> Orientation {
    let exif_reader = Reader::new();
    let mut cursor = Cursor::new(bytes);

    match exif_reader.read_from_container(&mut cursor) {
        Ok(exif) => {
            if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                if let Some(value) = field.value.get_uint(0) {
                    return Orientation::from(value);
                }
            }
            Orientation::Normal
        }
        Err(_) => Orientation::Normal,
    }
}

/// Apply an EXIF orientation transformation to an image.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}
