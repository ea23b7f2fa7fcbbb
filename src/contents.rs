//! Asset catalog manifest (`Contents.json`) for an `.appiconset` folder.
//!
//! Xcode describes each icon slot by a point size and a scale factor. A
//! 32 pixel image, for example, fills both the 16pt @2x and the 32pt @1x
//! slots.

use serde::{Deserialize, Serialize};

use crate::icon::TargetSpec;

/// File name Xcode expects inside an asset catalog folder.
pub const CONTENTS_FILE: &str = "Contents.json";

/// Point sizes of the macOS app icon slots.
pub const MAC_POINT_SIZES: [u32; 5] = [16, 32, 128, 256, 512];

/// Scale factors of the macOS app icon slots.
pub const MAC_SCALES: [u32; 2] = [1, 2];

/// One image slot in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentsImage {
    pub size: String,
    pub idiom: String,
    pub filename: String,
    pub scale: String,
}

/// Manifest metadata block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentsInfo {
    pub version: u32,
    pub author: String,
}

impl Default for ContentsInfo {
    fn default() -> Self {
        Self {
            version: 1,
            author: "xcode".into(),
        }
    }
}

/// The complete `Contents.json` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AppIconContents {
    pub images: Vec<ContentsImage>,
    pub info: ContentsInfo,
}

impl AppIconContents {
    /// Builds the manifest for the given targets.
    ///
    /// Every (point size, scale) slot is filled by the first target whose
    /// edge equals `point * scale`. Slots with no matching target are left
    /// out.
    pub fn for_targets(targets: &[TargetSpec]) -> Self {
        let mut images = Vec::new();
        for point in MAC_POINT_SIZES {
            for scale in MAC_SCALES {
                let edge = point * scale;
                if let Some(target) = targets.iter().find(|t| t.edge == edge) {
                    images.push(ContentsImage {
                        size: format!("{point}x{point}"),
                        idiom: "mac".into(),
                        filename: target.identifier.clone(),
                        scale: format!("{scale}x"),
                    });
                }
            }
        }
        Self {
            images,
            info: ContentsInfo::default(),
        }
    }

    /// Serializes to the pretty-printed form Xcode writes.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
