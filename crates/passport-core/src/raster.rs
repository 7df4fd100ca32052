//! Owned RGB pixel grids passed between pipeline stages.

/// Number of bytes per RGB sample.
pub const CHANNELS: usize = 3;

/// An owned RGB raster with explicit dimensions.
///
/// Each pipeline stage allocates a fresh buffer and hands it on; nothing
/// downstream mutates a buffer it received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length should be width * height * 3.
    pub pixels: Vec<u8>,
}

impl RasterBuffer {
    /// Create a buffer from dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * CHANNELS,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a buffer where every pixel has the same colour.
    pub fn filled(width: u32, height: u32, color: [u8; 3]) -> Self {
        let count = width as usize * height as usize;
        let mut pixels = Vec::with_capacity(count * CHANNELS);
        for _ in 0..count {
            pixels.extend_from_slice(&color);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a buffer from an `image::RgbImage`.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Convert to an `image::RgbImage`, or `None` if the buffer is inconsistent.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Number of bytes in one row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// True when the dimensions are non-zero and the pixel data matches them.
    pub fn is_well_formed(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.pixels.len() == self.width as usize * self.height as usize * CHANNELS
    }

    /// Read the pixel at `(x, y)`. Panics if out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = y as usize * self.stride() + x as usize * CHANNELS;
        [self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]]
    }

    /// Write the pixel at `(x, y)`. Panics if out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 3]) {
        let idx = y as usize * self.stride() + x as usize * CHANNELS;
        self.pixels[idx..idx + CHANNELS].copy_from_slice(&color);
    }

    /// Fill the rectangle `[x0, x1) × [y0, y1)`, clipped to the buffer.
    pub fn fill_rect(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, color: [u8; 3]) {
        let x1 = x1.min(self.width);
        let y1 = y1.min(self.height);
        for y in y0..y1 {
            for x in x0..x1 {
                self.set_pixel(x, y, color);
            }
        }
    }

    /// Copy all of `src` into this buffer with its top-left at `(x, y)`.
    ///
    /// Rows that would fall outside this buffer are clipped.
    pub fn blit(&mut self, src: &RasterBuffer, x: u32, y: u32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let copy_w = src.width.min(self.width - x) as usize;
        let copy_h = src.height.min(self.height - y);
        let dst_stride = self.stride();
        let src_stride = src.stride();

        for row in 0..copy_h {
            let src_start = row as usize * src_stride;
            let dst_start = (y + row) as usize * dst_stride + x as usize * CHANNELS;
            self.pixels[dst_start..dst_start + copy_w * CHANNELS]
                .copy_from_slice(&src.pixels[src_start..src_start + copy_w * CHANNELS]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> RasterBuffer {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&[x as u8, y as u8, 7]);
            }
        }
        RasterBuffer::new(width, height, pixels)
    }

    #[test]
    fn test_filled() {
        let buf = RasterBuffer::filled(4, 3, [10, 20, 30]);
        assert_eq!(buf.pixels.len(), 36);
        assert_eq!(buf.pixel(3, 2), [10, 20, 30]);
        assert!(buf.is_well_formed());
    }

    #[test]
    fn test_well_formed_rejects_mismatch() {
        let buf = RasterBuffer {
            width: 2,
            height: 2,
            pixels: vec![0; 5],
        };
        assert!(!buf.is_well_formed());

        let empty = RasterBuffer {
            width: 0,
            height: 0,
            pixels: vec![],
        };
        assert!(!empty.is_well_formed());
    }

    #[test]
    fn test_blit_places_rows() {
        let mut dst = RasterBuffer::filled(10, 10, [255, 255, 255]);
        let src = gradient(3, 2);
        dst.blit(&src, 4, 5);

        assert_eq!(dst.pixel(4, 5), src.pixel(0, 0));
        assert_eq!(dst.pixel(6, 6), src.pixel(2, 1));
        assert_eq!(dst.pixel(3, 5), [255, 255, 255]);
        assert_eq!(dst.pixel(7, 5), [255, 255, 255]);
        assert_eq!(dst.pixel(4, 7), [255, 255, 255]);
    }

    #[test]
    fn test_blit_clips_at_edge() {
        let mut dst = RasterBuffer::filled(5, 5, [0, 0, 0]);
        let src = RasterBuffer::filled(4, 4, [9, 9, 9]);
        dst.blit(&src, 3, 3);

        assert_eq!(dst.pixel(4, 4), [9, 9, 9]);
        assert_eq!(dst.pixel(2, 2), [0, 0, 0]);
        assert_eq!(dst.pixels.len(), 75);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut buf = RasterBuffer::filled(4, 4, [0, 0, 0]);
        buf.fill_rect(2, 2, 10, 10, [1, 2, 3]);
        assert_eq!(buf.pixel(3, 3), [1, 2, 3]);
        assert_eq!(buf.pixel(1, 1), [0, 0, 0]);
    }

    #[test]
    fn test_rgb_image_conversion() {
        let buf = gradient(6, 4);
        let img = buf.to_rgb_image().unwrap();
        let back = RasterBuffer::from_rgb_image(img);
        assert_eq!(back, buf);
    }
}
