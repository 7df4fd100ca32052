//! Lossless PNG encoding, used for previews and test fixtures.

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::jpeg::{validate_rgb, EncodeError};
use crate::raster::RasterBuffer;

/// Encode a [`RasterBuffer`] to PNG bytes.
pub fn encode_png(raster: &RasterBuffer) -> Result<Vec<u8>, EncodeError> {
    validate_rgb(&raster.pixels, raster.width, raster.height)?;

    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(
            &raster.pixels,
            raster.width,
            raster.height,
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_signature() {
        let raster = RasterBuffer::filled(8, 8, [1, 2, 3]);
        let png = encode_png(&raster).unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_png_rejects_malformed_raster() {
        let raster = RasterBuffer {
            width: 4,
            height: 4,
            pixels: vec![0; 10],
        };
        assert!(matches!(
            encode_png(&raster),
            Err(EncodeError::InvalidPixelData { .. })
        ));
    }
}
