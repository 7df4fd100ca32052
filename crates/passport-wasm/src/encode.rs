//! Encoding and export-naming WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { export_passport, export_sheet, export_file_name } from '@passport/wasm';
//!
//! const jpeg = export_passport(set, 95);
//! const name = export_file_name(file.name, 'passport'); // "selfie-passport.jpg"
//! download(new Blob([jpeg], { type: 'image/jpeg' }), name);
//! ```

use crate::render::JsPrintSet;
use crate::types::JsRasterBuffer;
use passport_core::encode;
use passport_core::ExportKind;
use wasm_bindgen::prelude::*;

/// Encode a raster as JPEG bytes.
///
/// `quality` is clamped to 1-100; 95 matches the default export quality.
#[wasm_bindgen]
pub fn encode_jpeg(image: &JsRasterBuffer, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_raster_jpeg(&image.to_raster(), quality)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a raster as lossless PNG bytes.
#[wasm_bindgen]
pub fn encode_png(image: &JsRasterBuffer) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(&image.to_raster()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode the passport canvas of a print set as JPEG.
#[wasm_bindgen]
pub fn export_passport(set: &JsPrintSet, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_raster_jpeg(set.passport_raster(), quality)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode the print sheet of a print set as JPEG.
#[wasm_bindgen]
pub fn export_sheet(set: &JsPrintSet, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_raster_jpeg(set.sheet_raster(), quality)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn kind_from_str(kind: &str) -> Option<ExportKind> {
    match kind.to_ascii_lowercase().as_str() {
        "passport" => Some(ExportKind::Passport),
        "sheet" | "a4-sheet" => Some(ExportKind::Sheet),
        _ => None,
    }
}

/// Download name for an export, derived from the uploaded file name.
///
/// `kind` is `"passport"` or `"sheet"`.
#[wasm_bindgen]
pub fn export_file_name(source_name: &str, kind: &str) -> Result<String, JsValue> {
    let kind = kind_from_str(kind)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown export kind: {}", kind)))?;
    Ok(passport_core::export_file_name(source_name, kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str() {
        assert_eq!(kind_from_str("passport"), Some(ExportKind::Passport));
        assert_eq!(kind_from_str("Sheet"), Some(ExportKind::Sheet));
        assert_eq!(kind_from_str("a4-sheet"), Some(ExportKind::Sheet));
        assert_eq!(kind_from_str("poster"), None);
    }

    #[test]
    fn test_raster_encodes_to_jpeg() {
        let img = JsRasterBuffer::new(10, 10, vec![128u8; 10 * 10 * 3]);
        let jpeg = encode::encode_raster_jpeg(&img.to_raster(), 90).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }
}
