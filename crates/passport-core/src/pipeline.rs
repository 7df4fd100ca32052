//! End-to-end rendering: source → passport canvas → print sheet.
//!
//! Each call is independent. Callers that re-render on every slider change
//! simply drop results that have been superseded; there is nothing to cancel.

use log::debug;

use crate::config::PrintConfig;
use crate::error::RenderError;
use crate::portrait::render_portrait_with_filter;
use crate::raster::RasterBuffer;
use crate::sheet::{compose, SheetLayout};
use crate::transform::{CropRegion, RotationAngle};

/// The two print outputs plus the layout used for the sheet.
#[derive(Debug, Clone)]
pub struct PrintSet {
    pub passport: RasterBuffer,
    pub sheet: RasterBuffer,
    pub layout: SheetLayout,
}

/// Render the passport photo and its print sheet in one pass.
///
/// `rotation` is re-clamped to the configured limit. The sheet stage only
/// runs if the portrait stage succeeded, and nothing is rendered when the
/// configured sheet cannot hold a single cell.
pub fn render_print_set(
    source: &RasterBuffer,
    crop: &CropRegion,
    rotation: RotationAngle,
    config: &PrintConfig,
) -> Result<PrintSet, RenderError> {
    config.validate()?;
    let rotation = rotation.clamped_to(config.rotation_limit());
    // Fail before the expensive resample if the sheet cannot hold a cell.
    SheetLayout::compute(config.sheet, config.passport, &config.layout)?;

    let passport =
        render_portrait_with_filter(source, crop, rotation, config.passport, config.filter)?;
    let (sheet, layout) = compose(&passport, config.sheet, config.passport, &config.layout)?;

    debug!(
        "print set ready: passport {}x{}, sheet {}x{} with {} copies",
        passport.width,
        passport.height,
        sheet.width,
        sheet.height,
        layout.cell_count()
    );
    Ok(PrintSet {
        passport,
        sheet,
        layout,
    })
}
