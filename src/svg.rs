//! SVG rasterization using resvg/usvg.
//!
//! Vector logos are rendered straight to each target size instead of being
//! rasterized once and resampled.

use image::{Rgba, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

/// Parses SVG markup into a render tree.
pub fn parse_svg(data: &[u8]) -> Result<Tree, String> {
    let opts = Options::default();
    Tree::from_data(data, &opts).map_err(|e| e.to_string())
}

/// Returns the intrinsic size of a parsed SVG in whole pixels (rounded up).
pub fn intrinsic_size(tree: &Tree) -> (u32, u32) {
    let size = tree.size();
    (size.width().ceil() as u32, size.height().ceil() as u32)
}

/// Renders an SVG tree to exactly `width` x `height` pixels.
///
/// The two axes are scaled independently, so a non-square drawing is
/// stretched to fill the target. Returns `None` if the pixmap cannot be
/// allocated (zero-sized target).
pub fn render_tree(tree: &Tree, width: u32, height: u32) -> Option<RgbaImage> {
    let svg_size = tree.size();
    let scale_x = width as f32 / svg_size.width();
    let scale_y = height as f32 / svg_size.height();

    let mut pixmap = Pixmap::new(width, height)?;
    resvg::render(tree, Transform::from_scale(scale_x, scale_y), &mut pixmap.as_mut());

    Some(pixmap_to_rgba_image(&pixmap))
}

/// Converts a tiny_skia Pixmap to an image::RgbaImage.
fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    RgbaImage::from_fn(pixmap.width(), pixmap.height(), |x, y| {
        // Coordinates come from the pixmap's own bounds.
        let Some(pixel) = pixmap.pixel(x, y) else {
            return Rgba([0, 0, 0, 0]);
        };
        // tiny_skia stores premultiplied alpha
        let (r, g, b, a) = unpremultiply(pixel.red(), pixel.green(), pixel.blue(), pixel.alpha());
        Rgba([r, g, b, a])
    })
}

/// Unpremultiplies a premultiplied alpha pixel.
fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> (u8, u8, u8, u8) {
    if a == 0 {
        (0, 0, 0, 0)
    } else {
        let a_f = a as f32 / 255.0;
        (
            (r as f32 / a_f).round().min(255.0) as u8,
            (g as f32 / a_f).round().min(255.0) as u8,
            (b as f32 / a_f).round().min(255.0) as u8,
            a,
        )
    }
}
