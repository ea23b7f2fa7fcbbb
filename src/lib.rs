//! rounded-iconset: macOS-style rounded app icons from a single logo
//!
//! This crate resizes a source logo into a set of square PNG renditions and
//! cuts each one with a rounded-rectangle alpha mask whose corner radius is
//! 22.37% of the edge length, the corner style macOS uses for app icons.
//!
//! # Example
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use rounded_iconset::{render_rounded_icon, SourceImage};
//!
//! let logo = RgbaImage::from_pixel(300, 200, Rgba([200, 30, 30, 255]));
//! let source = SourceImage::from_rgba(logo)?;
//!
//! let icon = render_rounded_icon(&source, 128)?;
//! assert_eq!(icon.dimensions(), (128, 128));
//! assert_eq!(icon.get_pixel(0, 0).0[3], 0);
//! # Ok::<(), rounded_iconset::IconError>(())
//! ```
//!
//! # Generating a Project's Icon Set
//!
//! [`generate_icon_set`] reads the logo named by an [`IconSetConfig`] and
//! writes one PNG per [`TargetSpec`]:
//!
//! ```no_run
//! use rounded_iconset::{generate_icon_set, IconSetConfig};
//!
//! let config = IconSetConfig::for_project("/path/to/flutter/app");
//! let written = generate_icon_set(&config)?;
//! for path in written {
//!     println!("{}", path.display());
//! }
//! # Ok::<(), rounded_iconset::IconError>(())
//! ```

mod config;
mod contents;
mod error;
mod generate;
mod icon;
mod mask;
mod masker;
mod source;
mod svg;

pub use config::{DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE, IconSetConfig};
pub use contents::{AppIconContents, CONTENTS_FILE, ContentsImage, ContentsInfo};
pub use error::{IconError, Result};
pub use generate::{generate_icon_set, generate_icon_set_with, save_png};
pub use icon::{DEFAULT_EDGES, IconImage, SizePx, TargetSpec};
pub use mask::{CORNER_RADIUS_RATIO, RoundedMask, corner_radius};
pub use masker::{IconMasker, render_rounded_icon};
pub use source::SourceImage;
