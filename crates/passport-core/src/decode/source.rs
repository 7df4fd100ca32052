//! Source decoding with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageReader};
use log::debug;

use super::{DecodeError, Orientation};
use crate::raster::RasterBuffer;

/// Decode JPEG or PNG bytes into an upright RGB raster.
///
/// The EXIF orientation tag, when present, is applied so that the returned
/// buffer matches what a browser shows for the same file. Any alpha channel
/// is discarded.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format cannot be recognised,
/// and `DecodeError::CorruptedFile` if decoding fails part way.
pub fn decode_image(bytes: &[u8]) -> Result<RasterBuffer, DecodeError> {
    let orientation = extract_orientation(bytes);
    let img = decode_dynamic(bytes)?;
    let oriented = apply_orientation(img, orientation);

    let buffer = RasterBuffer::from_rgb_image(oriented.into_rgb8());
    debug!(
        "decoded source {}x{} (orientation {:?})",
        buffer.width, buffer.height, orientation
    );
    Ok(buffer)
}

/// Decode image bytes without applying EXIF orientation.
pub fn decode_image_no_orientation(bytes: &[u8]) -> Result<RasterBuffer, DecodeError> {
    let img = decode_dynamic(bytes)?;
    Ok(RasterBuffer::from_rgb_image(img.into_rgb8()))
}

/// Extract the EXIF orientation value from image bytes.
///
/// Returns `Orientation::Upright` when the file carries no EXIF data.
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    extract_orientation(bytes)
}

fn decode_dynamic(bytes: &[u8]) -> Result<DynamicImage, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::InvalidFormat);
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))
}

fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);

    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .and_then(Orientation::from_exif)
            .unwrap_or_default(),
        Err(_) => Orientation::Upright,
    }
}

fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Upright => img,
        Orientation::Mirrored => img.fliph(),
        Orientation::UpsideDown => img.rotate180(),
        Orientation::MirroredUpsideDown => img.flipv(),
        Orientation::MirroredQuarterLeft => img.rotate90().fliph(),
        Orientation::QuarterRight => img.rotate90(),
        Orientation::MirroredQuarterRight => img.rotate270().fliph(),
        Orientation::QuarterLeft => img.rotate270(),
    }
}
