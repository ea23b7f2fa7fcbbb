//! Icon types: render targets and rendered images.
//!
//! A [`TargetSpec`] names one required rendition of the app icon. Rendering
//! it yields an [`IconImage`].

use std::path::Path;

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};

/// Edge lengths of the default macOS app icon renditions.
pub const DEFAULT_EDGES: [u32; 7] = [16, 32, 64, 128, 256, 512, 1024];

/// A 2D size in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true if width equals height.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

/// One output rendition: a file name and the square edge length in pixels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetSpec {
    /// File name written into the output directory, e.g. `app_icon_16.png`.
    pub identifier: String,

    /// Width and height of the rendered icon.
    pub edge: u32,
}

impl TargetSpec {
    /// Creates a target with an explicit file name.
    pub fn new(identifier: impl Into<String>, edge: u32) -> Self {
        Self {
            identifier: identifier.into(),
            edge,
        }
    }

    /// Creates a target using the `app_icon_<edge>.png` naming template.
    pub fn app_icon(edge: u32) -> Self {
        Self::new(format!("app_icon_{edge}.png"), edge)
    }

    /// The seven renditions a macOS `AppIcon.appiconset` expects.
    pub fn default_set() -> Vec<Self> {
        DEFAULT_EDGES.iter().copied().map(Self::app_icon).collect()
    }

    /// Checks that the edge is positive and the identifier is a bare file name.
    pub fn validate(&self) -> Result<()> {
        if self.edge == 0 {
            return Err(IconError::InvalidSize(self.edge));
        }
        let name = Path::new(&self.identifier);
        if self.identifier.is_empty() || name.file_name() != Some(name.as_os_str()) {
            return Err(IconError::Config(format!(
                "target identifier {:?} must be a plain file name",
                self.identifier
            )));
        }
        Ok(())
    }
}

/// A rendered icon together with the target it was produced for.
#[derive(Debug, Clone, PartialEq)]
pub struct IconImage {
    /// The rendered pixels, always `edge` x `edge`.
    pub data: RgbaImage,

    /// The target this image satisfies.
    pub target: TargetSpec,

    /// Corner radius of the mask applied to `data`.
    pub radius: u32,
}

impl IconImage {
    pub fn new(data: RgbaImage, target: TargetSpec, radius: u32) -> Self {
        Self {
            data,
            target,
            radius,
        }
    }

    /// Returns the pixel dimensions of the image.
    pub fn dimensions(&self) -> SizePx {
        SizePx::new(self.data.width(), self.data.height())
    }

    /// Alpha value of the pixel at `(x, y)`.
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.data.get_pixel(x, y).0[3]
    }
}
