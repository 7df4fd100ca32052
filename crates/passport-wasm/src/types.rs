//! WASM-compatible wrapper types for raster data.
//!
//! [`JsRasterBuffer`] owns an RGB buffer in WASM memory and hands copies of
//! it to JavaScript on request.

use passport_core::RasterBuffer;
use wasm_bindgen::prelude::*;

/// An RGB raster wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data stays in WASM memory. `pixels()` copies it into a
/// `Uint8Array`, so keep intermediate images (the decoded upload, the
/// passport canvas) on the WASM side and only extract what you display.
///
/// `free()` releases the memory immediately; otherwise wasm-bindgen's
/// finalizer does it eventually.
#[wasm_bindgen]
pub struct JsRasterBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsRasterBuffer {
    /// Create a raster from dimensions and RGB pixel data (3 bytes per
    /// pixel, row-major).
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsRasterBuffer {
        JsRasterBuffer {
            width,
            height,
            pixels,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of bytes in the pixel buffer (width * height * 3).
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGB pixel data as a `Uint8Array` copy.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Returns the pixels expanded to RGBA, ready for `new ImageData(...)`.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.pixels.len() / 3 * 4);
        for px in self.pixels.chunks_exact(3) {
            rgba.extend_from_slice(&[px[0], px[1], px[2], 255]);
        }
        rgba
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {}
}

impl JsRasterBuffer {
    pub(crate) fn from_raster(raster: RasterBuffer) -> Self {
        Self {
            width: raster.width,
            height: raster.height,
            pixels: raster.pixels,
        }
    }

    /// Copy back into a core [`RasterBuffer`].
    pub(crate) fn to_raster(&self) -> RasterBuffer {
        RasterBuffer {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}
