//! Sheet compositor: tile a rendered passport photo onto a print sheet.
//!
//! The cell is copied pixel-for-pixel, never rescaled, so it must already
//! be rendered at the sheet's DPI. The grid is centred within the margins
//! and cut guides are drawn in the blank space between cells.

mod guides;
mod layout;

pub use guides::draw_cut_guides;
pub use layout::{CellRect, SheetLayout};

use log::{debug, trace};

use crate::config::{PhysicalSize, SheetConfig};
use crate::error::RenderError;
use crate::raster::RasterBuffer;

/// Compose a sheet with the default margin, gutter and cut guides.
pub fn render_sheet(
    cell: &RasterBuffer,
    sheet_size: PhysicalSize,
    cell_physical_size: PhysicalSize,
) -> Result<RasterBuffer, RenderError> {
    render_sheet_with_config(cell, sheet_size, cell_physical_size, &SheetConfig::default())
}

/// Compose a sheet using an explicit [`SheetConfig`].
///
/// # Errors
///
/// - `CellSizeMismatch` if `cell` is not `cell_physical_size` pixels
/// - `DpiMismatch` if the cell and sheet DPI differ
/// - `CellTooLarge` if no whole cell fits inside the margins
pub fn render_sheet_with_config(
    cell: &RasterBuffer,
    sheet_size: PhysicalSize,
    cell_physical_size: PhysicalSize,
    config: &SheetConfig,
) -> Result<RasterBuffer, RenderError> {
    compose(cell, sheet_size, cell_physical_size, config).map(|(sheet, _)| sheet)
}

/// Compose a sheet and also return the layout used.
pub(crate) fn compose(
    cell: &RasterBuffer,
    sheet_size: PhysicalSize,
    cell_physical_size: PhysicalSize,
    config: &SheetConfig,
) -> Result<(RasterBuffer, SheetLayout), RenderError> {
    if !cell.is_well_formed()
        || cell.width != cell_physical_size.width_px
        || cell.height != cell_physical_size.height_px
    {
        return Err(RenderError::CellSizeMismatch {
            expected: (cell_physical_size.width_px, cell_physical_size.height_px),
            actual: (cell.width, cell.height),
        });
    }

    let layout = SheetLayout::compute(sheet_size, cell_physical_size, config)?;

    let mut sheet = RasterBuffer::filled(sheet_size.width_px, sheet_size.height_px, config.background);
    for rect in layout.cell_rects() {
        trace!("cell ({}, {}) at ({}, {})", rect.column, rect.row, rect.x, rect.y);
        sheet.blit(cell, rect.x, rect.y);
    }
    draw_cut_guides(&mut sheet, &layout, &config.guides);

    debug!(
        "composed {} cells onto {}x{} sheet",
        layout.cell_count(),
        sheet.width,
        sheet.height
    );
    Ok((sheet, layout))
}
