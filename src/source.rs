//! Source logo loading.
//!
//! The source is decoded once and then only read. Raster formats go through
//! the `image` crate; SVG files are kept as a parsed tree and rasterized at
//! each requested size.

use std::fmt;
use std::path::Path;

use image::RgbaImage;
use image::imageops::{self, FilterType};
use resvg::usvg::Tree;

use crate::error::{IconError, Result};
use crate::icon::SizePx;
use crate::svg;

/// A decoded source logo.
pub enum SourceImage {
    /// A bitmap decoded to RGBA.
    Raster(RgbaImage),
    /// A parsed SVG document.
    Vector(Tree),
}

impl fmt::Debug for SourceImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.dimensions();
        let kind = match self {
            Self::Raster(_) => "Raster",
            Self::Vector(_) => "Vector",
        };
        f.debug_struct("SourceImage")
            .field("kind", &kind)
            .field("width", &size.width)
            .field("height", &size.height)
            .finish()
    }
}

impl SourceImage {
    /// Loads a source from disk.
    ///
    /// Files with an `.svg` extension are parsed as SVG, everything else is
    /// decoded by content sniffing. A path that does not exist yields
    /// [`IconError::MissingSource`]; one that exists but cannot be read as a
    /// file (a directory, say) fails with [`IconError::Io`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(IconError::MissingSource(path.to_path_buf()));
        }

        let source = if is_svg_path(path) {
            let data = std::fs::read(path).map_err(|source| IconError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let tree = svg::parse_svg(&data).map_err(|message| IconError::Svg {
                path: path.to_path_buf(),
                message,
            })?;
            Self::Vector(tree)
        } else {
            let img = image::ImageReader::open(path)
                .map_err(|source| IconError::Io {
                    path: path.to_path_buf(),
                    source,
                })?
                .with_guessed_format()
                .map_err(|source| IconError::Io {
                    path: path.to_path_buf(),
                    source,
                })?
                .decode()
                .map_err(|source| IconError::Decode {
                    path: path.to_path_buf(),
                    source,
                })?;
            Self::Raster(img.to_rgba8())
        };

        let size = source.dimensions();
        if size.width == 0 || size.height == 0 {
            return Err(IconError::EmptySource);
        }
        log::debug!(
            "loaded source {} ({}x{})",
            path.display(),
            size.width,
            size.height
        );
        Ok(source)
    }

    /// Decodes a raster source from in-memory bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(data).map_err(|source| IconError::Decode {
            path: "<memory>".into(),
            source,
        })?;
        Self::from_rgba(img.to_rgba8())
    }

    /// Wraps an already-decoded RGBA bitmap.
    pub fn from_rgba(img: RgbaImage) -> Result<Self> {
        if img.width() == 0 || img.height() == 0 {
            return Err(IconError::EmptySource);
        }
        Ok(Self::Raster(img))
    }

    /// Pixel dimensions of the source (intrinsic size for SVG).
    pub fn dimensions(&self) -> SizePx {
        match self {
            Self::Raster(img) => SizePx::new(img.width(), img.height()),
            Self::Vector(tree) => {
                let (w, h) = svg::intrinsic_size(tree);
                SizePx::new(w, h)
            }
        }
    }

    /// Produces a copy of the source forced to `edge` x `edge` pixels.
    ///
    /// Bitmaps are resampled with Lanczos3; aspect ratio is not preserved.
    /// The source itself is never modified.
    pub fn to_square(&self, edge: u32) -> Result<RgbaImage> {
        if edge == 0 {
            return Err(IconError::InvalidSize(edge));
        }
        match self {
            Self::Raster(img) => {
                if img.dimensions() == (edge, edge) {
                    Ok(img.clone())
                } else {
                    Ok(imageops::resize(img, edge, edge, FilterType::Lanczos3))
                }
            }
            Self::Vector(tree) => {
                svg::render_tree(tree, edge, edge).ok_or(IconError::InvalidSize(edge))
            }
        }
    }
}

fn is_svg_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn resize_forces_square() {
        let img = RgbaImage::from_pixel(40, 20, Rgba([0, 255, 0, 255]));
        let source = SourceImage::from_rgba(img).unwrap();

        let square = source.to_square(16).unwrap();
        assert_eq!(square.dimensions(), (16, 16));
        // Source untouched
        assert_eq!(source.dimensions(), SizePx::new(40, 20));
    }

    #[test]
    fn zero_edge_rejected() {
        let source = SourceImage::from_rgba(RgbaImage::new(4, 4)).unwrap();
        assert!(matches!(source.to_square(0), Err(IconError::InvalidSize(0))));
    }

    #[test]
    fn empty_raster_rejected() {
        assert!(matches!(
            SourceImage::from_rgba(RgbaImage::new(0, 0)),
            Err(IconError::EmptySource)
        ));
    }

    #[test]
    fn garbage_bytes_are_decode_error() {
        let err = SourceImage::from_bytes(b"definitely not a png").unwrap_err();
        assert!(matches!(err, IconError::Decode { .. }));
    }

    #[test]
    fn missing_file_is_missing_source() {
        let err = SourceImage::open("/nonexistent/dir/logo.png").unwrap_err();
        assert!(err.is_missing_source());
    }

    #[test]
    fn directory_source_is_not_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.png");
        std::fs::create_dir(&path).unwrap();

        let err = SourceImage::open(&path).unwrap_err();
        assert!(!err.is_missing_source());
        assert!(
            matches!(err, IconError::Io { .. } | IconError::Decode { .. }),
            "{err}"
        );
    }

    #[test]
    fn svg_extension_detection() {
        assert!(is_svg_path(Path::new("logo.svg")));
        assert!(is_svg_path(Path::new("LOGO.SVG")));
        assert!(!is_svg_path(Path::new("logo.png")));
        assert!(!is_svg_path(Path::new("logo")));
    }
}
