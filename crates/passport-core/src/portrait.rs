//! Portrait renderer: crop, rotate and resample a source photo into the
//! fixed-size passport canvas.
//!
//! # Algorithm
//!
//! Inverse mapping over the output grid. For output pixel `(u, v)`:
//! ```text
//! dx = (u + 0.5) * crop.width  / out_w - crop.width  / 2
//! dy = (v + 0.5) * crop.height / out_h - crop.height / 2
//! (sx, sy) = rotate⁻¹(dx, dy) about the crop centre
//! out[u, v] = sample(source, sx - 0.5, sy - 0.5)
//! ```
//! The horizontal and vertical scale factors are independent, so a crop
//! whose aspect ratio differs from the output is stretched to fill it
//! exactly rather than letterboxed.

use log::debug;

use crate::config::PhysicalSize;
use crate::decode::decode_image;
use crate::error::RenderError;
use crate::raster::RasterBuffer;
use crate::transform::{sample, CropRegion, InterpolationFilter, RotationAngle, RotationTransform};

/// Render the passport canvas using bilinear interpolation.
///
/// The returned buffer is always exactly `output_size.width_px ×
/// output_size.height_px`. Identical inputs produce byte-identical output.
///
/// # Errors
///
/// - `UnsupportedImage` if `source` is empty or its pixel data does not
///   match its dimensions
/// - `InvalidOutputSize` if `output_size` has a zero dimension or is too
///   large to allocate
/// - `InvalidCropRegion` if `crop` is malformed or leaves the source bounds
pub fn render_portrait(
    source: &RasterBuffer,
    crop: &CropRegion,
    rotation: RotationAngle,
    output_size: PhysicalSize,
) -> Result<RasterBuffer, RenderError> {
    render_portrait_with_filter(
        source,
        crop,
        rotation,
        output_size,
        InterpolationFilter::Bilinear,
    )
}

/// Render the passport canvas with an explicit interpolation filter.
pub fn render_portrait_with_filter(
    source: &RasterBuffer,
    crop: &CropRegion,
    rotation: RotationAngle,
    output_size: PhysicalSize,
    filter: InterpolationFilter,
) -> Result<RasterBuffer, RenderError> {
    if !source.is_well_formed() {
        return Err(RenderError::UnsupportedImage(format!(
            "source is {}x{} with {} bytes of pixel data",
            source.width,
            source.height,
            source.pixels.len()
        )));
    }
    output_size.validate()?;
    crop.validate(source.width, source.height)?;

    let (out_w, out_h) = (output_size.width_px, output_size.height_px);
    if (crop.aspect_ratio() - output_size.aspect_ratio()).abs() > 1e-3 {
        debug!(
            "crop aspect {:.4} differs from output {:.4}, stretching to fill",
            crop.aspect_ratio(),
            output_size.aspect_ratio()
        );
    }
    debug!(
        "rendering portrait {}x{} from crop ({:.1}, {:.1}) {:.1}x{:.1}, rotation {}°, {:?}",
        out_w,
        out_h,
        crop.x,
        crop.y,
        crop.width,
        crop.height,
        rotation.degrees(),
        filter
    );

    let scale_x = crop.width / out_w as f64;
    let scale_y = crop.height / out_h as f64;
    let half_w = crop.width / 2.0;
    let half_h = crop.height / 2.0;
    let (cx, cy) = crop.center();
    let transform = RotationTransform::new(rotation, cx, cy);

    let mut output = vec![0u8; out_w as usize * out_h as usize * 3];

    for v in 0..out_h {
        let dy = (v as f64 + 0.5) * scale_y - half_h;
        let row_start = v as usize * out_w as usize * 3;

        for u in 0..out_w {
            let dx = (u as f64 + 0.5) * scale_x - half_w;
            let (sx, sy) = transform.source_point(dx, dy);

            let pixel = sample(source, sx - 0.5, sy - 0.5, filter);
            let idx = row_start + u as usize * 3;
            output[idx..idx + 3].copy_from_slice(&pixel);
        }
    }

    Ok(RasterBuffer::new(out_w, out_h, output))
}

/// Decode `bytes` and render the passport canvas from them.
///
/// Decoding failures are reported as `UnsupportedImage`.
pub fn render_portrait_from_bytes(
    bytes: &[u8],
    crop: &CropRegion,
    rotation: RotationAngle,
    output_size: PhysicalSize,
    filter: InterpolationFilter,
) -> Result<RasterBuffer, RenderError> {
    let source = decode_image(bytes)?;
    render_portrait_with_filter(&source, crop, rotation, output_size, filter)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn crop_strategy() -> impl Strategy<Value = (u32, u32, CropRegion)> {
        (8u32..=60, 8u32..=60).prop_flat_map(|(w, h)| {
            (0.0..(w as f64 - 1.0), 0.0..(h as f64 - 1.0)).prop_flat_map(move |(x, y)| {
                (
                    Just((w, h)),
                    0.5..=(w as f64 - x),
                    0.5..=(h as f64 - y),
                )
                    .prop_map(move |((w, h), cw, ch)| (w, h, CropRegion::new(x, y, cw, ch)))
            })
        })
    }

    proptest! {
        /// Property: output dimensions always equal the requested size.
        #[test]
        fn prop_output_matches_requested_size(
            (w, h, crop) in crop_strategy(),
            (out_w, out_h) in (1u32..=40, 1u32..=40),
            degrees in -30.0f64..=30.0,
        ) {
            let source = RasterBuffer::filled(w, h, [10, 20, 30]);
            let out = PhysicalSize::new(out_w, out_h, 300);
            let result = render_portrait(&source, &crop, RotationAngle::new(degrees), out).unwrap();

            prop_assert_eq!(result.width, out_w);
            prop_assert_eq!(result.height, out_h);
            prop_assert_eq!(result.pixels.len(), (out_w * out_h * 3) as usize);
        }

        /// Property: rotated edge crops only ever produce clamped source
        /// colours.
        #[test]
        fn prop_uniform_source_stays_uniform(
            (w, h, crop) in crop_strategy(),
            degrees in -30.0f64..=30.0,
        ) {
            let source = RasterBuffer::filled(w, h, [201, 99, 42]);
            let out = PhysicalSize::new(16, 20, 300);
            let result = render_portrait(&source, &crop, RotationAngle::new(degrees), out).unwrap();
            prop_assert!(result.pixels.chunks(3).all(|p| p == [201, 99, 42]));
        }

        /// Property: rendering is deterministic.
        #[test]
        fn prop_render_deterministic(
            (w, h, crop) in crop_strategy(),
            degrees in -30.0f64..=30.0,
        ) {
            let mut pixels = Vec::new();
            for i in 0..(w * h) {
                pixels.extend_from_slice(&[(i % 251) as u8, (i % 13) as u8, (i % 97) as u8]);
            }
            let source = RasterBuffer::new(w, h, pixels);
            let out = PhysicalSize::new(12, 15, 300);
            let rotation = RotationAngle::new(degrees);

            let a = render_portrait(&source, &crop, rotation, out).unwrap();
            let b = render_portrait(&source, &crop, rotation, out).unwrap();
            prop_assert_eq!(a.pixels, b.pixels);
        }
    }
}
