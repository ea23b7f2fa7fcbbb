//! Rounded icon rendering: resize, mask, composite.

use std::collections::HashMap;

use image::RgbaImage;

use crate::error::{IconError, Result};
use crate::icon::{IconImage, TargetSpec};
use crate::mask::RoundedMask;
use crate::source::SourceImage;

/// Renders a rounded icon of `edge` x `edge` pixels from `source`.
///
/// The source is forced to a square with a high-quality resampling filter,
/// then its alpha channel is replaced by a [`RoundedMask`] of the same size.
/// Colour channels are carried over unchanged.
pub fn render_rounded_icon(source: &SourceImage, edge: u32) -> Result<RgbaImage> {
    if edge == 0 {
        return Err(IconError::InvalidSize(edge));
    }
    let resized = source.to_square(edge)?;
    Ok(RoundedMask::new(edge).apply(&resized))
}

/// Renders rounded icons from a single decoded source.
///
/// The source is decoded once and shared by every render. Masks depend only
/// on the edge length, so they are cached per edge and reused when a target
/// list repeats a size.
///
/// # Example
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use rounded_iconset::{IconMasker, SourceImage, TargetSpec};
///
/// let source = SourceImage::from_rgba(RgbaImage::from_pixel(64, 48, Rgba([255, 0, 0, 255])))?;
/// let mut masker = IconMasker::new(source);
///
/// let icon = masker.render(&TargetSpec::app_icon(32))?;
/// assert_eq!(icon.dimensions().width, 32);
/// assert_eq!(icon.alpha_at(0, 0), 0);
/// assert_eq!(icon.alpha_at(16, 16), 255);
/// # Ok::<(), rounded_iconset::IconError>(())
/// ```
#[derive(Debug)]
pub struct IconMasker {
    /// The decoded source (never modified).
    source: SourceImage,

    masks: HashMap<u32, RoundedMask>,
}

impl IconMasker {
    /// Creates a masker for the given source.
    pub fn new(source: SourceImage) -> Self {
        if !source.dimensions().is_square() {
            let size = source.dimensions();
            log::warn!(
                "source is {}x{}, icons will be stretched to square",
                size.width,
                size.height
            );
        }
        Self {
            source,
            masks: HashMap::new(),
        }
    }

    /// Returns the mask for `edge`, building it on first use.
    pub fn mask(&mut self, edge: u32) -> &RoundedMask {
        self.masks.entry(edge).or_insert_with(|| {
            log::debug!("building {edge}x{edge} mask");
            RoundedMask::new(edge)
        })
    }

    /// Renders a single target.
    pub fn render(&mut self, target: &TargetSpec) -> Result<IconImage> {
        target.validate()?;
        let edge = target.edge;

        let resized = self.source.to_square(edge)?;
        let mask = self.mask(edge);
        let data = mask.apply(&resized);
        let radius = mask.radius();

        log::debug!(
            "rendered {} ({edge}x{edge}, radius {radius})",
            target.identifier
        );
        Ok(IconImage::new(data, target.clone(), radius))
    }
}
