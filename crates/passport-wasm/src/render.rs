//! Portrait and sheet rendering WASM bindings.
//!
//! Every function takes an optional configuration object. Missing fields
//! (or a missing object) fall back to the 35×45 mm passport on A4 at 300 DPI.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, render_print_set, sheet_layout } from '@passport/wasm';
//!
//! const source = decode_image(bytes);
//!
//! // Crop from the cropper widget, in source pixels.
//! const set = render_print_set(source, crop.x, crop.y, crop.width, crop.height, -3.5);
//! ctx.putImageData(new ImageData(new Uint8ClampedArray(set.passport.to_rgba()),
//!   set.passport.width), 0, 0);
//!
//! const layout = sheet_layout({ layout: { margin_px: 120 } });
//! console.log(`${layout.columns} x ${layout.rows} copies`);
//! ```

use crate::types::JsRasterBuffer;
use passport_core::sheet::render_sheet_with_config;
use passport_core::{
    render_portrait_with_filter, render_print_set as core_print_set, CropRegion, PrintConfig,
    RasterBuffer, RenderError, RotationAngle, SheetLayout,
};
use wasm_bindgen::prelude::*;

/// Read a [`PrintConfig`] from JavaScript, defaulting when absent.
fn parse_config(config: JsValue) -> Result<PrintConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(PrintConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Invalid print config: {}", e)))
}

fn to_js_error(err: RenderError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn portrait(
    source: &RasterBuffer,
    crop: &CropRegion,
    rotation_degrees: f64,
    config: &PrintConfig,
) -> Result<RasterBuffer, RenderError> {
    config.validate()?;
    let rotation = RotationAngle::with_limit(rotation_degrees, config.rotation_limit());
    render_portrait_with_filter(source, crop, rotation, config.passport, config.filter)
}

/// Render the passport canvas from a crop of `image`.
///
/// # Arguments
///
/// * `x`, `y`, `width`, `height` - Crop rectangle in source pixels
/// * `rotation_degrees` - Tilt correction, positive = clockwise
/// * `config` - Optional partial `PrintConfig`
///
/// # Errors
///
/// Returns an error if the crop lies outside the image, the image is empty,
/// or the configuration is invalid.
#[wasm_bindgen]
pub fn render_portrait(
    image: &JsRasterBuffer,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    rotation_degrees: f64,
    config: JsValue,
) -> Result<JsRasterBuffer, JsValue> {
    let config = parse_config(config)?;
    let crop = CropRegion::new(x, y, width, height);
    portrait(&image.to_raster(), &crop, rotation_degrees, &config)
        .map(JsRasterBuffer::from_raster)
        .map_err(to_js_error)
}

/// Tile a rendered passport canvas onto the configured sheet.
///
/// `cell` must already be `config.passport` pixels in size.
#[wasm_bindgen]
pub fn render_sheet(cell: &JsRasterBuffer, config: JsValue) -> Result<JsRasterBuffer, JsValue> {
    let config = parse_config(config)?;
    render_sheet_with_config(&cell.to_raster(), config.sheet, config.passport, &config.layout)
        .map(JsRasterBuffer::from_raster)
        .map_err(to_js_error)
}

/// Passport canvas, print sheet and layout from one render.
#[wasm_bindgen]
pub struct JsPrintSet {
    passport: RasterBuffer,
    sheet: RasterBuffer,
    layout: SheetLayout,
}

#[wasm_bindgen]
impl JsPrintSet {
    /// Copy of the passport canvas.
    #[wasm_bindgen(getter)]
    pub fn passport(&self) -> JsRasterBuffer {
        JsRasterBuffer::from_raster(self.passport.clone())
    }

    /// Copy of the print sheet.
    #[wasm_bindgen(getter)]
    pub fn sheet(&self) -> JsRasterBuffer {
        JsRasterBuffer::from_raster(self.sheet.clone())
    }

    #[wasm_bindgen(getter)]
    pub fn columns(&self) -> u32 {
        self.layout.columns
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 {
        self.layout.rows
    }

    /// Number of copies on the sheet.
    #[wasm_bindgen(getter)]
    pub fn copies(&self) -> u32 {
        self.layout.cell_count()
    }
}

impl JsPrintSet {
    pub(crate) fn passport_raster(&self) -> &RasterBuffer {
        &self.passport
    }

    pub(crate) fn sheet_raster(&self) -> &RasterBuffer {
        &self.sheet
    }
}

fn print_set(
    source: &RasterBuffer,
    crop: &CropRegion,
    rotation_degrees: f64,
    config: &PrintConfig,
) -> Result<JsPrintSet, RenderError> {
    let rotation = RotationAngle::with_limit(rotation_degrees, config.rotation_limit());
    let set = core_print_set(source, crop, rotation, config)?;
    Ok(JsPrintSet {
        passport: set.passport,
        sheet: set.sheet,
        layout: set.layout,
    })
}

/// Render the passport canvas and its print sheet in one call.
///
/// Arguments match [`render_portrait`].
#[wasm_bindgen]
pub fn render_print_set(
    image: &JsRasterBuffer,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    rotation_degrees: f64,
    config: JsValue,
) -> Result<JsPrintSet, JsValue> {
    let config = parse_config(config)?;
    let crop = CropRegion::new(x, y, width, height);
    print_set(&image.to_raster(), &crop, rotation_degrees, &config).map_err(to_js_error)
}

/// Grid the configured sheet would use, as a plain object
/// (`columns`, `rows`, `origin_x`, `origin_y`, ...).
#[wasm_bindgen]
pub fn sheet_layout(config: JsValue) -> Result<JsValue, JsValue> {
    let config = parse_config(config)?;
    let layout =
        SheetLayout::compute(config.sheet, config.passport, &config.layout).map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&layout).map_err(|e| JsValue::from_str(&e.to_string()))
}
