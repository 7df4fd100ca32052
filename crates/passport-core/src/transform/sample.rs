//! Clamp-to-edge pixel sampling with bilinear and Lanczos3 interpolation.
//!
//! Coordinates passed to [`sample`] are in pixel-centre space: `(0.0, 0.0)`
//! is the centre of the top-left pixel. Any coordinate outside the image is
//! clamped to the nearest edge pixel, so sampling never reads out of bounds
//! and never produces black or transparent fill.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::raster::{RasterBuffer, CHANNELS};

/// Interpolation filter used when resampling the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InterpolationFilter {
    /// Bilinear interpolation over the 2x2 neighbourhood.
    #[default]
    Bilinear,
    /// Lanczos3 over a 6x6 neighbourhood. Sharper, about 9x slower.
    Lanczos3,
}

/// Sample `image` at `(x, y)` using `filter`.
#[inline]
pub fn sample(image: &RasterBuffer, x: f64, y: f64, filter: InterpolationFilter) -> [u8; 3] {
    match filter {
        InterpolationFilter::Bilinear => convolve(
            image,
            &linear_taps(x, image.width),
            &linear_taps(y, image.height),
        ),
        InterpolationFilter::Lanczos3 => convolve(
            image,
            &lanczos_taps(x, image.width),
            &lanczos_taps(y, image.height),
        ),
    }
}

/// Source indices along one axis and their normalised weights.
struct Taps<const N: usize> {
    index: [usize; N],
    weight: [f64; N],
}

fn linear_taps(pos: f64, len: u32) -> Taps<2> {
    let last = len as usize - 1;
    let pos = pos.clamp(0.0, last as f64);
    let lo = pos.floor();
    let t = pos - lo;
    let lo = lo as usize;

    Taps {
        index: [lo, (lo + 1).min(last)],
        weight: [1.0 - t, t],
    }
}

fn lanczos_taps(pos: f64, len: u32) -> Taps<6> {
    let last = len as i64 - 1;
    let pos = pos.clamp(0.0, last as f64);
    let first = pos.floor() as i64 - 2;

    let mut taps = Taps {
        index: [0; 6],
        weight: [0.0; 6],
    };
    let mut total = 0.0;
    for k in 0..6 {
        let at = first + k as i64;
        taps.index[k] = at.clamp(0, last) as usize;
        taps.weight[k] = lanczos3(pos - at as f64);
        total += taps.weight[k];
    }

    if total.abs() < f64::EPSILON {
        // Degenerate kernel: take the nearest lower pixel.
        taps.weight = [0.0, 0.0, 1.0, 0.0, 0.0, 0.0];
    } else {
        for w in &mut taps.weight {
            *w /= total;
        }
    }
    taps
}

/// Weighted sum over the separable `xs × ys` neighbourhood.
fn convolve<const N: usize>(image: &RasterBuffer, xs: &Taps<N>, ys: &Taps<N>) -> [u8; 3] {
    let stride = image.stride();
    let mut acc = [0.0f64; 3];

    for (&row, &wy) in ys.index.iter().zip(&ys.weight) {
        if wy == 0.0 {
            continue;
        }
        let line = &image.pixels[row * stride..(row + 1) * stride];
        for (&col, &wx) in xs.index.iter().zip(&xs.weight) {
            let w = wx * wy;
            if w == 0.0 {
                continue;
            }
            let px = &line[col * CHANNELS..(col + 1) * CHANNELS];
            for (a, &v) in acc.iter_mut().zip(px) {
                *a += v as f64 * w;
            }
        }
    }
    acc.map(|v| v.clamp(0.0, 255.0).round() as u8)
}

fn sinc(x: f64) -> f64 {
    if x.abs() < 1e-12 {
        return 1.0;
    }
    let px = PI * x;
    px.sin() / px
}

/// Lanczos kernel with a three-lobe window.
fn lanczos3(x: f64) -> f64 {
    if x.abs() >= 3.0 {
        0.0
    } else {
        sinc(x) * sinc(x / 3.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Horizontal ramp: red = 10 * x, green = 10 * y.
    fn ramp(width: u32, height: u32) -> RasterBuffer {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&[(x * 10) as u8, (y * 10) as u8, 200]);
            }
        }
        RasterBuffer::new(width, height, pixels)
    }

    #[test]
    fn test_bilinear_exact_at_pixel_centres() {
        let img = ramp(8, 6);
        assert_eq!(sample(&img, 3.0, 2.0, InterpolationFilter::Bilinear), [30, 20, 200]);
    }

    #[test]
    fn test_bilinear_midpoint() {
        let img = ramp(8, 6);
        // Halfway between x=2 and x=3, y=4 and y=5
        assert_eq!(sample(&img, 2.5, 4.5, InterpolationFilter::Bilinear), [25, 45, 200]);
    }

    #[test]
    fn test_bilinear_clamps_outside() {
        let img = ramp(8, 6);
        assert_eq!(
            sample(&img, -40.0, -3.0, InterpolationFilter::Bilinear),
            img.pixel(0, 0)
        );
        assert_eq!(
            sample(&img, 100.0, 100.0, InterpolationFilter::Bilinear),
            img.pixel(7, 5)
        );
        // Clamped on one axis only
        assert_eq!(
            sample(&img, 4.0, -9.0, InterpolationFilter::Bilinear),
            img.pixel(4, 0)
        );
    }

    #[test]
    fn test_single_pixel_image() {
        let img = RasterBuffer::new(1, 1, vec![12, 34, 56]);
        for filter in [InterpolationFilter::Bilinear, InterpolationFilter::Lanczos3] {
            assert_eq!(sample(&img, 0.3, 0.7, filter), [12, 34, 56]);
            assert_eq!(sample(&img, -5.0, 9.0, filter), [12, 34, 56]);
        }
    }

    #[test]
    fn test_lanczos_exact_at_pixel_centres() {
        let img = ramp(12, 12);
        assert_eq!(sample(&img, 6.0, 5.0, InterpolationFilter::Lanczos3), [60, 50, 200]);
    }

    #[test]
    fn test_lanczos_uniform_stays_uniform_at_edges() {
        let img = RasterBuffer::filled(5, 5, [90, 90, 90]);
        for (x, y) in [(0.0, 0.0), (0.4, 4.0), (4.0, 2.5), (-2.0, 7.0)] {
            assert_eq!(sample(&img, x, y, InterpolationFilter::Lanczos3), [90, 90, 90]);
        }
    }

    #[test]
    fn test_lanczos_kernel_shape() {
        assert_eq!(lanczos3(0.0), 1.0);
        assert_eq!(lanczos3(3.0), 0.0);
        assert_eq!(lanczos3(-4.5), 0.0);
        assert!(lanczos3(1.0).abs() < 1e-12);
        assert!((lanczos3(1.5) - lanczos3(-1.5)).abs() < 1e-12);
    }

    #[test]
    fn test_taps_are_normalised() {
        for pos in [0.0, 0.25, 3.7, 9.0, 11.0] {
            let taps = lanczos_taps(pos, 12);
            assert!((taps.weight.iter().sum::<f64>() - 1.0).abs() < 1e-9);
            assert!(taps.index.iter().all(|&i| i < 12));
        }
        let edge = linear_taps(11.0, 12);
        assert_eq!(edge.index, [11, 11]);
    }
}
