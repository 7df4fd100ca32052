//! Error types for the rendering pipeline.

use thiserror::Error;

use crate::decode::DecodeError;

/// Errors reported by the portrait renderer and sheet compositor.
///
/// A failed call never yields a buffer, so nothing partial reaches the next
/// stage.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RenderError {
    /// The crop rectangle is malformed or not contained in the source image.
    #[error("Invalid crop region: {0}")]
    InvalidCropRegion(String),

    /// The source could not be decoded into an RGB pixel grid.
    #[error("Unsupported image: {0}")]
    UnsupportedImage(String),

    /// Not a single cell fits on the sheet with the configured margin and gutter.
    #[error(
        "Cell {cell_width}x{cell_height} does not fit on a {sheet_width}x{sheet_height} sheet \
         with margin {margin} and gutter {gutter}"
    )]
    CellTooLarge {
        cell_width: u32,
        cell_height: u32,
        sheet_width: u32,
        sheet_height: u32,
        margin: u32,
        gutter: u32,
    },

    /// The cell buffer does not have the pixel size it claims to have.
    #[error(
        "Cell buffer is {}x{}, expected {}x{}",
        .actual.0, .actual.1, .expected.0, .expected.1
    )]
    CellSizeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// The cell was not rendered at the sheet's pixel density.
    #[error("Cell rendered at {cell} DPI but sheet is {sheet} DPI")]
    DpiMismatch { sheet: u32, cell: u32 },

    /// An output size has a zero dimension or zero DPI.
    #[error("Invalid output size: {0}")]
    InvalidOutputSize(String),
}

impl From<DecodeError> for RenderError {
    fn from(err: DecodeError) -> Self {
        RenderError::UnsupportedImage(err.to_string())
    }
}
