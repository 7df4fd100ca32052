//! Rotation of the crop frame about its centre.
//!
//! The renderer uses inverse mapping: for each output position it asks where
//! that position came from in the source. For a clockwise rotation by θ in a
//! y-down frame, the inverse transform about the pivot `(cx, cy)` is:
//! ```text
//! src_x = cx + dx * cos(θ) + dy * sin(θ)
//! src_y = cy - dx * sin(θ) + dy * cos(θ)
//! ```
//! where `(dx, dy)` is the offset of the output position from the crop centre.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_MAX_ROTATION_DEGREES;

/// A rotation in degrees, bounded to a configured range.
///
/// Positive values rotate the photo clockwise on screen. Construction never
/// fails: non-finite input becomes 0° and out-of-range input is clamped.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct RotationAngle(f64);

impl RotationAngle {
    pub const ZERO: RotationAngle = RotationAngle(0.0);

    /// Create an angle bounded to ±30°.
    pub fn new(degrees: f64) -> Self {
        Self::with_limit(degrees, DEFAULT_MAX_ROTATION_DEGREES)
    }

    /// Create an angle bounded to `±limit` degrees.
    pub fn with_limit(degrees: f64, limit: f64) -> Self {
        let limit = if limit.is_finite() { limit.abs() } else { DEFAULT_MAX_ROTATION_DEGREES };

        if !degrees.is_finite() {
            warn!("non-finite rotation {} replaced with 0", degrees);
            return Self::ZERO;
        }
        if degrees.abs() > limit {
            warn!("rotation {} clamped to ±{}", degrees, limit);
        }
        Self(degrees.clamp(-limit, limit))
    }

    /// Re-apply a (possibly tighter) limit.
    pub fn clamped_to(self, limit: f64) -> Self {
        Self::with_limit(self.0, limit)
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }

    /// True when the rotation has no visible effect.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0.abs() < 1e-9
    }
}

impl From<f64> for RotationAngle {
    fn from(degrees: f64) -> Self {
        Self::new(degrees)
    }
}

impl From<RotationAngle> for f64 {
    fn from(angle: RotationAngle) -> Self {
        angle.0
    }
}

/// Inverse rotation about a fixed pivot, precomputed for a render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationTransform {
    cx: f64,
    cy: f64,
    cos: f64,
    sin: f64,
}

impl RotationTransform {
    /// Build the transform for `angle` pivoting on `(cx, cy)`.
    pub fn new(angle: RotationAngle, cx: f64, cy: f64) -> Self {
        let (sin, cos) = if angle.is_zero() {
            (0.0, 1.0)
        } else {
            angle.radians().sin_cos()
        };
        Self { cx, cy, cos, sin }
    }

    /// Map an offset from the pivot in the rotated output frame back to
    /// absolute source coordinates.
    #[inline]
    pub fn source_point(&self, dx: f64, dy: f64) -> (f64, f64) {
        (
            self.cx + dx * self.cos + dy * self.sin,
            self.cy - dx * self.sin + dy * self.cos,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn test_angle_within_range_kept() {
        assert_eq!(RotationAngle::new(12.5).degrees(), 12.5);
        assert_eq!(RotationAngle::new(-30.0).degrees(), -30.0);
    }

    #[test]
    fn test_angle_clamped_to_limit() {
        assert_eq!(RotationAngle::new(45.0).degrees(), 30.0);
        assert_eq!(RotationAngle::new(-90.0).degrees(), -30.0);
        assert_eq!(RotationAngle::with_limit(90.0, 180.0).degrees(), 90.0);
    }

    #[test]
    fn test_angle_non_finite_is_zero() {
        assert!(RotationAngle::new(f64::NAN).is_zero());
        assert!(RotationAngle::new(f64::INFINITY).is_zero());
    }

    #[test]
    fn test_clamped_to_tighter_limit() {
        let angle = RotationAngle::new(25.0).clamped_to(10.0);
        assert_eq!(angle.degrees(), 10.0);
    }

    #[test]
    fn test_angle_serde_applies_clamp() {
        let angle: RotationAngle = serde_json::from_str("75.0").unwrap();
        assert_eq!(angle.degrees(), 30.0);
        assert_eq!(serde_json::to_string(&RotationAngle::new(-2.5)).unwrap(), "-2.5");
    }

    #[test]
    fn test_zero_rotation_is_translation() {
        let t = RotationTransform::new(RotationAngle::ZERO, 10.0, 20.0);
        assert_eq!(t.source_point(3.0, -4.0), (13.0, 16.0));
    }

    #[test]
    fn test_clockwise_quarter_turn() {
        // A point that ends up below the pivot after a clockwise quarter turn
        // started out to the right of it.
        let angle = RotationAngle::with_limit(90.0, 180.0);
        let t = RotationTransform::new(angle, 0.0, 0.0);
        assert!(approx(t.source_point(0.0, 1.0), (1.0, 0.0)));
        assert!(approx(t.source_point(1.0, 0.0), (0.0, -1.0)));
    }

    #[test]
    fn test_pivot_is_fixed_point() {
        let t = RotationTransform::new(RotationAngle::new(17.0), 250.0, 310.0);
        assert!(approx(t.source_point(0.0, 0.0), (250.0, 310.0)));
    }

    #[test]
    fn test_rotation_preserves_distance() {
        let t = RotationTransform::new(RotationAngle::new(-23.0), 0.0, 0.0);
        let (x, y) = t.source_point(30.0, 40.0);
        assert!(((x * x + y * y).sqrt() - 50.0).abs() < 1e-9);
    }
}
