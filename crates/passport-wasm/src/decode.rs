//! Image decoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image } from '@passport/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const source = decode_image(bytes);
//! console.log(`Decoded ${source.width}x${source.height}`);
//! ```

use crate::types::JsRasterBuffer;
use passport_core::decode;
use wasm_bindgen::prelude::*;

/// Decode an uploaded JPEG or PNG, applying its EXIF orientation.
///
/// # Errors
///
/// Returns an error if the bytes are not a supported image or are corrupted.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsRasterBuffer, JsValue> {
    decode::decode_image(bytes)
        .map(JsRasterBuffer::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// EXIF orientation value (1-8) of an upload, 1 when absent.
#[wasm_bindgen]
pub fn get_orientation(bytes: &[u8]) -> u8 {
    decode::get_orientation(bytes) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use passport_core::encode::encode_png;
    use passport_core::RasterBuffer;

    #[test]
    fn test_orientation_of_plain_png() {
        let png = encode_png(&RasterBuffer::filled(8, 8, [10, 20, 30])).unwrap();
        assert_eq!(get_orientation(&png), 1);
    }
}
