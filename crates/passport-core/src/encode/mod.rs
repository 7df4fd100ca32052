//! Encoding of rendered rasters into file bytes.
//!
//! The core defines the pixel contract of each output; these helpers turn a
//! [`RasterBuffer`](crate::RasterBuffer) into JPEG or PNG bytes for the
//! download collaborator.
//!
//! # Examples
//!
//! ```ignore
//! use passport_core::encode::encode_raster_jpeg;
//!
//! let jpeg = encode_raster_jpeg(&passport, 95).unwrap();
//! std::fs::write("photo-passport.jpg", jpeg).unwrap();
//! ```

mod jpeg;
mod png;

pub use jpeg::{encode_jpeg, encode_raster_jpeg, EncodeError, DEFAULT_JPEG_QUALITY};
pub use png::encode_png;
