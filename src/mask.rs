//! Rounded-rectangle opacity masks.
//!
//! A mask depends only on the edge length: the corner radius is a fixed
//! fraction of it, matching the continuous-corner look of macOS app icons.
//!
//! # Rasterization
//!
//! Pixels are treated as lattice points spanning `0..=edge - 1` on both axes,
//! so the mask is symmetric under horizontal and vertical flips. Inside each
//! corner zone the opacity is `clamp(r - d, 0, 1)`, where `d` is the distance
//! from the pixel to the corner's circle centre. That gives a one-pixel
//! anti-aliased band just inside the curve and leaves the outermost corner
//! pixels fully transparent whenever the radius is at least 1.
//!
//! The circle centres sit `r` lattice steps in from each side, so the curve
//! reaches the border one pixel before the straight edge begins. Where the
//! two meet there is a one-pixel step: at 512 px, `(0, 113)` is 0 while
//! `(0, 114)` is 255 and `(1, 113)` is 254. This is the intended shape.

use image::{GrayImage, Luma, Rgba, RgbaImage};

/// Corner radius as a fraction of the icon edge length.
pub const CORNER_RADIUS_RATIO: f64 = 0.2237;

/// Returns the corner radius for an icon of the given edge length.
///
/// The product is truncated, not rounded: 512 gives 114, 16 gives 3.
pub fn corner_radius(edge: u32) -> u32 {
    (edge as f64 * CORNER_RADIUS_RATIO).floor() as u32
}

/// A single-channel rounded-rectangle mask.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedMask {
    radius: u32,
    alpha: GrayImage,
}

impl RoundedMask {
    /// Builds the mask for an `edge` x `edge` icon.
    ///
    /// An edge of 0 produces an empty mask; callers validate sizes first.
    pub fn new(edge: u32) -> Self {
        let radius = corner_radius(edge);
        let alpha = GrayImage::from_fn(edge, edge, |x, y| Luma([mask_alpha(edge, radius, x, y)]));
        Self { radius, alpha }
    }

    /// Corner radius used to draw this mask.
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Edge length of the mask.
    pub fn edge(&self) -> u32 {
        self.alpha.width()
    }

    /// Opacity at the given pixel.
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.alpha.get_pixel(x, y).0[0]
    }

    /// Returns the underlying grayscale raster.
    pub fn as_image(&self) -> &GrayImage {
        &self.alpha
    }

    /// Builds an RGBA image carrying the colour channels of `colors` and this
    /// mask as its alpha channel.
    ///
    /// Any alpha already present in `colors` is discarded. Both images must
    /// share the same dimensions.
    pub fn apply(&self, colors: &RgbaImage) -> RgbaImage {
        debug_assert_eq!(colors.dimensions(), self.alpha.dimensions());

        let mut output = RgbaImage::from_pixel(self.edge(), self.edge(), Rgba([0, 0, 0, 0]));
        for (x, y, pixel) in output.enumerate_pixels_mut() {
            let [r, g, b, _] = colors.get_pixel(x, y).0;
            pixel.0 = [r, g, b, self.alpha_at(x, y)];
        }
        output
    }
}

/// Opacity of a single mask pixel.
fn mask_alpha(edge: u32, radius: u32, x: u32, y: u32) -> u8 {
    if radius == 0 {
        return 255;
    }

    let last = edge - 1;
    let r = radius as f64;

    // Corner circle centre along one axis, or None when outside the corner band.
    let centre = |v: u32| -> Option<f64> {
        if v < radius {
            Some(r)
        } else if v > last.saturating_sub(radius) {
            Some((last - radius) as f64)
        } else {
            None
        }
    };

    let (Some(cx), Some(cy)) = (centre(x), centre(y)) else {
        return 255;
    };

    let dx = x as f64 - cx;
    let dy = y as f64 - cy;
    let distance = (dx * dx + dy * dy).sqrt();
    let coverage = (r - distance).clamp(0.0, 1.0);
    (coverage * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_truncates() {
        assert_eq!(corner_radius(16), 3);
        assert_eq!(corner_radius(32), 7);
        assert_eq!(corner_radius(64), 14);
        assert_eq!(corner_radius(128), 28);
        assert_eq!(corner_radius(256), 57);
        assert_eq!(corner_radius(512), 114);
        assert_eq!(corner_radius(1024), 229);
        assert_eq!(corner_radius(4), 0);
    }

    #[test]
    fn corners_transparent_centre_opaque() {
        for edge in [8, 16, 32, 64, 128, 256, 512, 1024] {
            let mask = RoundedMask::new(edge);
            let last = edge - 1;
            for (x, y) in [(0, 0), (last, 0), (0, last), (last, last)] {
                assert_eq!(mask.alpha_at(x, y), 0, "corner ({x}, {y}) at edge {edge}");
            }
            assert_eq!(mask.alpha_at(edge / 2, edge / 2), 255, "centre at edge {edge}");
        }
    }

    #[test]
    fn edges_between_corners_are_opaque() {
        let mask = RoundedMask::new(128);
        let r = mask.radius();
        assert_eq!(mask.alpha_at(64, 0), 255);
        assert_eq!(mask.alpha_at(0, 64), 255);
        assert_eq!(mask.alpha_at(127, 64), 255);
        assert_eq!(mask.alpha_at(64, 127), 255);
        assert_eq!(mask.alpha_at(r, 0), 255);
    }

    #[test]
    fn curve_meets_edge_with_one_pixel_step() {
        let mask = RoundedMask::new(512);
        assert_eq!(mask.radius(), 114);
        assert_eq!(mask.alpha_at(0, 113), 0);
        assert_eq!(mask.alpha_at(0, 114), 255);
        assert_eq!(mask.alpha_at(1, 113), 254);
        // Same step on the opposite side.
        assert_eq!(mask.alpha_at(511, 511 - 113), 0);
        assert_eq!(mask.alpha_at(511, 511 - 114), 255);
    }

    #[test]
    fn mask_is_symmetric() {
        let mask = RoundedMask::new(64);
        for y in 0..64 {
            for x in 0..64 {
                let a = mask.alpha_at(x, y);
                assert_eq!(a, mask.alpha_at(63 - x, y));
                assert_eq!(a, mask.alpha_at(x, 63 - y));
                assert_eq!(a, mask.alpha_at(y, x));
            }
        }
    }

    #[test]
    fn tiny_masks_are_fully_opaque() {
        let mask = RoundedMask::new(1);
        assert_eq!(mask.radius(), 0);
        assert_eq!(mask.alpha_at(0, 0), 255);

        let mask = RoundedMask::new(4);
        assert!(mask.as_image().pixels().all(|p| p.0[0] == 255));
    }

    #[test]
    fn curve_has_antialiased_band() {
        let mask = RoundedMask::new(512);
        let partial = mask
            .as_image()
            .pixels()
            .filter(|p| p.0[0] > 0 && p.0[0] < 255)
            .count();
        assert!(partial > 0);
    }

    #[test]
    fn apply_replaces_alpha_keeps_colour() {
        let colors = RgbaImage::from_pixel(32, 32, Rgba([10, 20, 30, 77]));
        let mask = RoundedMask::new(32);
        let out = mask.apply(&colors);

        assert_eq!(out.dimensions(), (32, 32));
        for (x, y, pixel) in out.enumerate_pixels() {
            assert_eq!(&pixel.0[..3], &[10, 20, 30]);
            assert_eq!(pixel.0[3], mask.alpha_at(x, y));
        }
    }
}
