//! Crop rectangles in source pixel coordinates.

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Slack allowed when checking containment, to absorb float noise from the
/// crop widget.
const CONTAINMENT_EPSILON: f64 = 1e-6;

/// A rectangle selecting the part of the source image to keep.
///
/// Values are source pixels and may be fractional; the crop widget rarely
/// lands on integer boundaries once zoom is involved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CropRegion {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a region from coordinates normalized to the source size
    /// (0.0 = left/top edge, 1.0 = right/bottom edge).
    pub fn from_normalized(
        left: f64,
        top: f64,
        width: f64,
        height: f64,
        source_width: u32,
        source_height: u32,
    ) -> Self {
        let sw = source_width as f64;
        let sh = source_height as f64;
        Self::new(left * sw, top * sh, width * sw, height * sh)
    }

    /// The full extent of a `width × height` source.
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0.0, 0.0, width as f64, height as f64)
    }

    /// Centre point of the rectangle; rotation pivots here.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check that the rectangle is well-formed and lies inside a
    /// `source_width × source_height` image.
    pub fn validate(&self, source_width: u32, source_height: u32) -> Result<(), RenderError> {
        let values = [self.x, self.y, self.width, self.height];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(RenderError::InvalidCropRegion(format!(
                "non-finite value in {:?}",
                self
            )));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(RenderError::InvalidCropRegion(format!(
                "size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.x < 0.0 || self.y < 0.0 {
            return Err(RenderError::InvalidCropRegion(format!(
                "origin must be non-negative, got ({}, {})",
                self.x, self.y
            )));
        }
        if self.right() > source_width as f64 + CONTAINMENT_EPSILON
            || self.bottom() > source_height as f64 + CONTAINMENT_EPSILON
        {
            return Err(RenderError::InvalidCropRegion(format!(
                "({}, {}) {}x{} exceeds {}x{} source",
                self.x, self.y, self.width, self.height, source_width, source_height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_and_edges() {
        let crop = CropRegion::new(100.0, 50.0, 800.0, 1028.0);
        assert_eq!(crop.center(), (500.0, 564.0));
        assert_eq!(crop.right(), 900.0);
        assert_eq!(crop.bottom(), 1078.0);
        // 800 x 1028 is the 35 x 45 mm ratio to within a thousandth.
        assert!((crop.aspect_ratio() - 35.0 / 45.0).abs() < 1e-3);
    }

    #[test]
    fn test_valid_crop() {
        let crop = CropRegion::new(100.0, 50.0, 800.0, 1028.0);
        assert!(crop.validate(1200, 1600).is_ok());
    }

    #[test]
    fn test_full_crop_is_valid() {
        assert!(CropRegion::full(640, 480).validate(640, 480).is_ok());
    }

    #[test]
    fn test_zero_or_negative_size_rejected() {
        for crop in [
            CropRegion::new(0.0, 0.0, 0.0, 10.0),
            CropRegion::new(0.0, 0.0, 10.0, 0.0),
            CropRegion::new(0.0, 0.0, -5.0, 10.0),
        ] {
            assert!(matches!(
                crop.validate(100, 100),
                Err(RenderError::InvalidCropRegion(_))
            ));
        }
    }

    #[test]
    fn test_negative_origin_rejected() {
        let crop = CropRegion::new(-1.0, 0.0, 10.0, 10.0);
        assert!(matches!(
            crop.validate(100, 100),
            Err(RenderError::InvalidCropRegion(_))
        ));
    }

    #[test]
    fn test_overflowing_crop_rejected() {
        let crop = CropRegion::new(50.0, 50.0, 60.0, 10.0);
        assert!(matches!(
            crop.validate(100, 100),
            Err(RenderError::InvalidCropRegion(_))
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        let crop = CropRegion::new(f64::NAN, 0.0, 10.0, 10.0);
        assert!(crop.validate(100, 100).is_err());
        let crop = CropRegion::new(0.0, 0.0, f64::INFINITY, 10.0);
        assert!(crop.validate(100, 100).is_err());
    }

    #[test]
    fn test_float_noise_at_edge_tolerated() {
        let crop = CropRegion::new(0.1, 0.0, 99.9 + 1e-9, 100.0);
        assert!(crop.validate(100, 100).is_ok());
    }

    #[test]
    fn test_from_normalized() {
        let crop = CropRegion::from_normalized(0.25, 0.5, 0.5, 0.25, 200, 400);
        assert_eq!(crop, CropRegion::new(50.0, 200.0, 100.0, 100.0));
    }
}
