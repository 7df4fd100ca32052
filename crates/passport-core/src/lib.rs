//! Passport Core - portrait rendering and print-sheet composition
//!
//! This crate turns a user's photo into a print-ready passport picture and
//! an A4 sheet of copies with cut guides. The interactive crop widget lives
//! elsewhere; this crate receives its result as a [`CropRegion`] plus a
//! [`RotationAngle`] and does the raster work.
//!
//! # Data Flow
//!
//! ```text
//! file bytes ─decode─▶ RasterBuffer ─render_portrait─▶ passport canvas
//!                                                      │
//!                                            render_sheet
//!                                                      ▼
//!                                                 A4 sheet ─encode─▶ JPEG
//! ```
//!
//! Every stage is a pure function of its inputs: no shared state, no I/O,
//! safe to call from several workers at once.

pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod portrait;
pub mod raster;
pub mod sheet;
pub mod transform;

pub use config::{
    CutGuideStyle, PhysicalSize, PrintConfig, SheetConfig, A4_300DPI, PASSPORT_35X45_300DPI,
};
pub use error::RenderError;
pub use export::{export_file_name, export_print_set, ExportKind, ExportedFile};
pub use pipeline::{render_print_set, PrintSet};
pub use portrait::{render_portrait, render_portrait_from_bytes, render_portrait_with_filter};
pub use raster::RasterBuffer;
pub use sheet::{render_sheet, render_sheet_with_config, CellRect, SheetLayout};
pub use transform::{CropRegion, InterpolationFilter, RotationAngle};
