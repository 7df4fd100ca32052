//! Passport WASM - WebAssembly bindings for passport-core
//!
//! Exposes decoding, portrait rendering, sheet composition and export to a
//! browser front end. Rendering runs synchronously inside the call, so hosts
//! that want a responsive UI should call these from a Web Worker.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible raster wrapper
//! - `decode` - Upload decoding with EXIF orientation
//! - `render` - Passport canvas, print sheet and layout
//! - `encode` - JPEG/PNG encoding and download names
//! - `logging` - Console backend for `log` records
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, render_print_set, export_sheet } from '@passport/wasm';
//!
//! await init();
//!
//! const source = decode_image(new Uint8Array(await file.arrayBuffer()));
//! const set = render_print_set(source, crop.x, crop.y, crop.width, crop.height, rotation);
//! const sheetJpeg = export_sheet(set, 95);
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod logging;
mod render;
mod types;

pub use decode::{decode_image, get_orientation};
pub use encode::{encode_jpeg, encode_png, export_file_name, export_passport, export_sheet};
pub use logging::init_logging;
pub use render::{render_portrait, render_print_set, render_sheet, sheet_layout, JsPrintSet};
pub use types::JsRasterBuffer;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
