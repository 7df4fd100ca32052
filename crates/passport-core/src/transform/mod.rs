//! Geometry of the portrait crop: crop rectangles, rotation, and sampling.
//!
//! # Coordinate System
//!
//! - Crop rectangles are in source pixel units; pixel `(i, j)` covers
//!   `[i, i+1) × [j, j+1)`, so its centre sits at `(i + 0.5, j + 0.5)`
//! - Origin is the top-left corner, y grows downwards
//! - Rotation angles are in degrees, positive = clockwise on screen
//! - Rotation pivots on the centre of the crop rectangle
//!
//! # Transform Order
//!
//! For an output pixel the renderer
//! 1. maps it into the crop rectangle (non-uniform scale if the aspect differs),
//! 2. undoes the rotation about the crop centre,
//! 3. samples the source with clamp-to-edge interpolation.

mod crop;
mod rotation;
mod sample;

pub use crop::CropRegion;
pub use rotation::{RotationAngle, RotationTransform};
pub use sample::{sample, InterpolationFilter};
