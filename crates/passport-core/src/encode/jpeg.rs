//! JPEG encoding for print exports.

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;

use crate::raster::{RasterBuffer, CHANNELS};

/// Quality used for exported passport photos and sheets.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Errors that can occur while encoding a raster.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("RGB buffer holds {actual} bytes, dimensions need {expected}")]
    InvalidPixelData { expected: usize, actual: usize },

    #[error("cannot encode an empty {width}x{height} raster")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("encoder failed: {0}")]
    EncodingFailed(String),
}

/// Check that `pixels` holds exactly `width * height` RGB samples.
pub(crate) fn validate_rgb(pixels: &[u8], width: u32, height: u32) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = width as usize * height as usize * CHANNELS;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }
    Ok(())
}

/// Encode a tightly packed RGB buffer as baseline JPEG.
///
/// `quality` is clamped to 1-100. Passport exports use
/// [`DEFAULT_JPEG_QUALITY`]; print shops recompress anything much lower.
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    validate_rgb(pixels, width, height)?;

    let mut out = Vec::with_capacity(pixels.len() / 8);
    JpegEncoder::new_with_quality(&mut out, quality.clamp(1, 100))
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;
    Ok(out)
}

/// Encode a [`RasterBuffer`] to JPEG bytes.
pub fn encode_raster_jpeg(raster: &RasterBuffer, quality: u8) -> Result<Vec<u8>, EncodeError> {
    encode_jpeg(&raster.pixels, raster.width, raster.height, quality)
}
