//! Grid layout of passport cells on a print sheet.
//!
//! Along each axis the number of whole cells is
//! ```text
//! count = floor((sheet - 2 * margin + gutter) / (cell + gutter))
//! ```
//! The grid is then centred inside the margins. When the leftover space is
//! odd, the spare pixel goes to the right/bottom side.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::{PhysicalSize, SheetConfig};
use crate::error::RenderError;

/// Pixel rectangle occupied by one cell on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRect {
    pub column: u32,
    pub row: u32,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CellRect {
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Placement of a `columns × rows` grid of cells on a sheet.
///
/// Derived from sizes and configuration on every call; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetLayout {
    pub sheet_width: u32,
    pub sheet_height: u32,
    pub columns: u32,
    pub rows: u32,
    pub cell_width: u32,
    pub cell_height: u32,
    pub margin: u32,
    pub gutter: u32,
    /// Left edge of the first column, margin and centring padding included.
    pub origin_x: u32,
    /// Top edge of the first row, margin and centring padding included.
    pub origin_y: u32,
}

/// Whole cells of `cell` length that fit in `sheet` after margins and gutters.
fn fit_count(sheet: u32, cell: u32, margin: u32, gutter: u32) -> u32 {
    let available = sheet as i64 - 2 * margin as i64 + gutter as i64;
    if available <= 0 || cell == 0 {
        return 0;
    }
    (available / (cell as i64 + gutter as i64)) as u32
}

/// Length of `count` cells separated by gutters.
fn span(count: u32, cell: u32, gutter: u32) -> u32 {
    if count == 0 {
        return 0;
    }
    count * cell + (count - 1) * gutter
}

impl SheetLayout {
    /// Compute the layout for `cell`-sized copies on a `sheet`.
    ///
    /// # Errors
    ///
    /// - `DpiMismatch` if the two sizes use different pixel densities
    /// - `CellTooLarge` if not even one cell fits along either axis
    pub fn compute(
        sheet: PhysicalSize,
        cell: PhysicalSize,
        config: &SheetConfig,
    ) -> Result<Self, RenderError> {
        sheet.validate()?;
        cell.validate()?;
        if sheet.dpi != cell.dpi {
            return Err(RenderError::DpiMismatch {
                sheet: sheet.dpi,
                cell: cell.dpi,
            });
        }

        let margin = config.margin_px;
        let gutter = config.gutter_px;
        let columns = fit_count(sheet.width_px, cell.width_px, margin, gutter);
        let rows = fit_count(sheet.height_px, cell.height_px, margin, gutter);

        if columns == 0 || rows == 0 {
            return Err(RenderError::CellTooLarge {
                cell_width: cell.width_px,
                cell_height: cell.height_px,
                sheet_width: sheet.width_px,
                sheet_height: sheet.height_px,
                margin,
                gutter,
            });
        }

        let leftover_x = sheet.width_px - 2 * margin - span(columns, cell.width_px, gutter);
        let leftover_y = sheet.height_px - 2 * margin - span(rows, cell.height_px, gutter);

        let layout = Self {
            sheet_width: sheet.width_px,
            sheet_height: sheet.height_px,
            columns,
            rows,
            cell_width: cell.width_px,
            cell_height: cell.height_px,
            margin,
            gutter,
            origin_x: margin + leftover_x / 2,
            origin_y: margin + leftover_y / 2,
        };

        debug!(
            "sheet layout {}x{} cells of {}x{} on {}x{}, origin ({}, {})",
            columns,
            rows,
            cell.width_px,
            cell.height_px,
            sheet.width_px,
            sheet.height_px,
            layout.origin_x,
            layout.origin_y
        );
        Ok(layout)
    }

    /// Total number of cells placed.
    pub fn cell_count(&self) -> u32 {
        self.columns * self.rows
    }

    /// Width of the grid including inner gutters.
    pub fn grid_width(&self) -> u32 {
        span(self.columns, self.cell_width, self.gutter)
    }

    /// Height of the grid including inner gutters.
    pub fn grid_height(&self) -> u32 {
        span(self.rows, self.cell_height, self.gutter)
    }

    /// Blank space around the grid as `(left, top, right, bottom)`.
    pub fn padding(&self) -> (u32, u32, u32, u32) {
        (
            self.origin_x,
            self.origin_y,
            self.sheet_width - self.origin_x - self.grid_width(),
            self.sheet_height - self.origin_y - self.grid_height(),
        )
    }

    /// Top-left corner of the cell at `(column, row)`.
    pub fn cell_origin(&self, column: u32, row: u32) -> Option<(u32, u32)> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        Some((
            self.origin_x + column * (self.cell_width + self.gutter),
            self.origin_y + row * (self.cell_height + self.gutter),
        ))
    }

    /// All cell rectangles in row-major order.
    pub fn cell_rects(&self) -> Vec<CellRect> {
        let mut rects = Vec::with_capacity(self.cell_count() as usize);
        for row in 0..self.rows {
            for column in 0..self.columns {
                let x = self.origin_x + column * (self.cell_width + self.gutter);
                let y = self.origin_y + row * (self.cell_height + self.gutter);
                rects.push(CellRect {
                    column,
                    row,
                    x,
                    y,
                    width: self.cell_width,
                    height: self.cell_height,
                });
            }
        }
        rects
    }
}
