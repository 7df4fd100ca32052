//! Cut guides drawn around tiled cells.
//!
//! Two kinds of mark, both drawn only in blank space so cell pixels are
//! never touched:
//!
//! - **Corner ticks**: at every cell corner, one short line continues each
//!   of the two edges outward. Ticks running into a gutter reach its
//!   midline, so ticks from neighbouring cells meet there. A 1 px gutter is
//!   filled completely.
//! - **Gutter marks**: where a gutter's midline reaches the outer margin, a
//!   tick in the margin shows where to cut through the gutter.

use crate::config::CutGuideStyle;
use crate::raster::RasterBuffer;

use super::layout::SheetLayout;

/// Draw cut guides for `layout` onto `sheet` using `style`.
pub fn draw_cut_guides(sheet: &mut RasterBuffer, layout: &SheetLayout, style: &CutGuideStyle) {
    if !style.enabled || style.tick_length == 0 {
        return;
    }
    let t = style
        .thickness
        .clamp(1, layout.cell_width.min(layout.cell_height));
    let inner_reach = style.tick_length.min(layout.gutter.div_ceil(2));
    let outer_reach = style.tick_length;

    for rect in layout.cell_rects() {
        let reach_left = if rect.column == 0 { outer_reach } else { inner_reach };
        let reach_right = if rect.column + 1 == layout.columns { outer_reach } else { inner_reach };
        let reach_top = if rect.row == 0 { outer_reach } else { inner_reach };
        let reach_bottom = if rect.row + 1 == layout.rows { outer_reach } else { inner_reach };

        let (x0, y0, x1, y1) = (rect.x, rect.y, rect.right(), rect.bottom());
        let color = style.color;

        // Horizontal ticks continue the top and bottom edges sideways.
        for y in [y0, y1 - t] {
            sheet.fill_rect(x0.saturating_sub(reach_left), y, x0, y + t, color);
            sheet.fill_rect(x1, y, x1 + reach_right, y + t, color);
        }
        // Vertical ticks continue the left and right edges up and down.
        for x in [x0, x1 - t] {
            sheet.fill_rect(x, y0.saturating_sub(reach_top), x + t, y0, color);
            sheet.fill_rect(x, y1, x + t, y1 + reach_bottom, color);
        }
    }

    if layout.gutter > 0 {
        draw_gutter_marks(sheet, layout, style, t.min(layout.gutter));
    }
}

fn draw_gutter_marks(sheet: &mut RasterBuffer, layout: &SheetLayout, style: &CutGuideStyle, t: u32) {
    let reach = style.tick_length;
    let color = style.color;
    let grid_left = layout.origin_x;
    let grid_top = layout.origin_y;
    let grid_right = grid_left + layout.grid_width();
    let grid_bottom = grid_top + layout.grid_height();
    let offset = (layout.gutter - t) / 2;

    for column in 1..layout.columns {
        let x = grid_left + column * (layout.cell_width + layout.gutter) - layout.gutter + offset;
        sheet.fill_rect(x, grid_top.saturating_sub(reach), x + t, grid_top, color);
        sheet.fill_rect(x, grid_bottom, x + t, grid_bottom + reach, color);
    }
    for row in 1..layout.rows {
        let y = grid_top + row * (layout.cell_height + layout.gutter) - layout.gutter + offset;
        sheet.fill_rect(grid_left.saturating_sub(reach), y, grid_left, y + t, color);
        sheet.fill_rect(grid_right, y, grid_right + reach, y + t, color);
    }
}
