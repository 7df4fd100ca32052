//! Physical output sizes and print configuration.
//!
//! Every raster the pipeline produces has a fixed physical size. Sizes are
//! stored in device pixels together with the DPI they were derived from, so
//! the compositor can check that a cell and a sheet share a pixel density.
//!
//! # Defaults
//!
//! | Output         | Physical       | Pixels @ 300 DPI |
//! |----------------|----------------|------------------|
//! | Passport photo | 35 x 45 mm     | 413 x 531        |
//! | A4 sheet       | 210 x 297 mm   | 2480 x 3508      |
//!
//! The sheet margin (150 px) and gutter (20 px) are fixed configuration, not
//! user controls.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::transform::InterpolationFilter;

/// Millimetres per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Pixel density used for every print output.
pub const PRINT_DPI: u32 = 300;

/// Largest accepted width or height, in pixels. A4 at 1200 DPI still fits.
pub const MAX_DIMENSION_PX: u32 = 20_000;

/// Default rotation limit in degrees (either direction).
pub const DEFAULT_MAX_ROTATION_DEGREES: f64 = 30.0;

/// Convert a length in millimetres to whole device pixels at `dpi`.
#[inline]
pub fn mm_to_px(mm: f64, dpi: u32) -> u32 {
    (mm / MM_PER_INCH * dpi as f64).round().max(0.0) as u32
}

/// Pixel dimensions of an output class together with their pixel density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicalSize {
    pub width_px: u32,
    pub height_px: u32,
    pub dpi: u32,
}

/// 35 x 45 mm passport photo at 300 DPI.
pub const PASSPORT_35X45_300DPI: PhysicalSize = PhysicalSize::new(413, 531, PRINT_DPI);

/// A4 portrait sheet (210 x 297 mm) at 300 DPI.
pub const A4_300DPI: PhysicalSize = PhysicalSize::new(2480, 3508, PRINT_DPI);

impl PhysicalSize {
    pub const fn new(width_px: u32, height_px: u32, dpi: u32) -> Self {
        Self {
            width_px,
            height_px,
            dpi,
        }
    }

    /// Derive pixel dimensions from a physical size in millimetres.
    pub fn from_mm(width_mm: f64, height_mm: f64, dpi: u32) -> Self {
        Self::new(mm_to_px(width_mm, dpi), mm_to_px(height_mm, dpi), dpi)
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width_px as f64 / self.height_px as f64
    }

    /// Size of an RGB buffer of these dimensions, `None` if it overflows.
    pub fn rgb_byte_len(&self) -> Option<usize> {
        (self.width_px as usize)
            .checked_mul(self.height_px as usize)?
            .checked_mul(crate::raster::CHANNELS)
    }

    pub fn width_mm(&self) -> f64 {
        self.width_px as f64 / self.dpi as f64 * MM_PER_INCH
    }

    pub fn height_mm(&self) -> f64 {
        self.height_px as f64 / self.dpi as f64 * MM_PER_INCH
    }

    /// Reject sizes with a zero dimension or zero DPI, and sizes too large
    /// to allocate.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width_px == 0
            || self.height_px == 0
            || self.dpi == 0
            || self.width_px > MAX_DIMENSION_PX
            || self.height_px > MAX_DIMENSION_PX
            || self.rgb_byte_len().is_none()
        {
            return Err(RenderError::InvalidOutputSize(format!(
                "{}x{} px @ {} DPI",
                self.width_px, self.height_px, self.dpi
            )));
        }
        Ok(())
    }
}

/// Appearance of the cut guides drawn around each tiled cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CutGuideStyle {
    pub enabled: bool,
    /// Neutral grey, well away from skin tones.
    pub color: [u8; 3],
    /// Line thickness in pixels (1-2 reads as a hairline at 300 DPI).
    pub thickness: u32,
    /// How far a tick extends beyond a cell corner, in pixels.
    /// Ticks inside a gutter stop at the gutter midline.
    pub tick_length: u32,
}

impl Default for CutGuideStyle {
    fn default() -> Self {
        Self {
            enabled: true,
            color: [140, 140, 140],
            thickness: 2,
            tick_length: 10,
        }
    }
}

/// Fixed layout constants for the sheet compositor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    /// Outer margin reserved on every side of the sheet, in pixels.
    pub margin_px: u32,
    /// Spacing between adjacent cells, in pixels.
    pub gutter_px: u32,
    /// Sheet background colour.
    pub background: [u8; 3],
    pub guides: CutGuideStyle,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            margin_px: 150,
            gutter_px: 20,
            background: [255, 255, 255],
            guides: CutGuideStyle::default(),
        }
    }
}

/// Complete configuration for producing a passport photo and its print sheet.
///
/// Deserializes from a partial object: missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintConfig {
    pub passport: PhysicalSize,
    pub sheet: PhysicalSize,
    pub layout: SheetConfig,
    /// Largest accepted rotation magnitude in degrees.
    pub max_rotation_degrees: f64,
    pub filter: InterpolationFilter,
    /// JPEG quality for exports (1-100).
    pub jpeg_quality: u8,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            passport: PASSPORT_35X45_300DPI,
            sheet: A4_300DPI,
            layout: SheetConfig::default(),
            max_rotation_degrees: DEFAULT_MAX_ROTATION_DEGREES,
            filter: InterpolationFilter::default(),
            jpeg_quality: crate::encode::DEFAULT_JPEG_QUALITY,
        }
    }
}

impl PrintConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check sizes and DPI consistency before any rendering starts.
    pub fn validate(&self) -> Result<(), RenderError> {
        self.passport.validate()?;
        self.sheet.validate()?;
        if self.passport.dpi != self.sheet.dpi {
            return Err(RenderError::DpiMismatch {
                sheet: self.sheet.dpi,
                cell: self.passport.dpi,
            });
        }
        if !self.max_rotation_degrees.is_finite() || self.max_rotation_degrees < 0.0 {
            warn!(
                "ignoring invalid rotation limit {}",
                self.max_rotation_degrees
            );
        }
        Ok(())
    }

    /// Rotation limit actually enforced, falling back to the default when
    /// the configured value is unusable.
    pub fn rotation_limit(&self) -> f64 {
        if self.max_rotation_degrees.is_finite() && self.max_rotation_degrees >= 0.0 {
            self.max_rotation_degrees
        } else {
            DEFAULT_MAX_ROTATION_DEGREES
        }
    }
}
