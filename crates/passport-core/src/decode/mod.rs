//! Source image decoding.
//!
//! Turns user-supplied file bytes (JPEG or PNG) into an upright RGB
//! [`RasterBuffer`](crate::RasterBuffer). EXIF orientation is applied during
//! decoding so that crop rectangles chosen on the displayed photo address
//! the same pixels the renderer samples.
//!
//! # Examples
//!
//! ```ignore
//! use passport_core::decode::decode_image;
//!
//! let bytes = std::fs::read("portrait.jpg").unwrap();
//! let source = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} source", source.width, source.height);
//! ```

mod source;
mod types;

pub use source::{decode_image, decode_image_no_orientation, get_orientation};
pub use types::{DecodeError, Orientation};
