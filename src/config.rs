//! Icon set configuration.
//!
//! An [`IconSetConfig`] carries every path and target the generator needs.
//! It can be built from a project root using the conventional Flutter macOS
//! layout, or loaded from JSON.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "rootDir": "/path/to/project",
//!   "sourcePath": "assets/images/logo.png",
//!   "outputDir": "macos/Runner/Assets.xcassets/AppIcon.appiconset",
//!   "targets": [
//!     { "identifier": "app_icon_16.png", "edge": 16 },
//!     { "identifier": "app_icon_32.png", "edge": 32 }
//!   ],
//!   "writeContentsJson": false
//! }
//! ```
//!
//! Relative `sourcePath` and `outputDir` values are resolved against
//! `rootDir`. Omitted `targets` fall back to the seven default renditions.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};
use crate::icon::TargetSpec;

/// Source logo location relative to the project root.
pub const DEFAULT_SOURCE: &str = "assets/images/logo.png";

/// macOS app icon asset folder relative to the project root.
pub const DEFAULT_OUTPUT_DIR: &str = "macos/Runner/Assets.xcassets/AppIcon.appiconset";

/// Everything needed to generate one icon set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconSetConfig {
    /// Project root that relative paths are resolved against.
    #[serde(default = "default_root")]
    pub root_dir: PathBuf,

    /// Source logo image.
    #[serde(default = "default_source")]
    pub source_path: PathBuf,

    /// Directory the PNG files are written into.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Renditions to produce, in order.
    #[serde(default = "TargetSpec::default_set")]
    pub targets: Vec<TargetSpec>,

    /// Also write an asset catalog `Contents.json` next to the images.
    #[serde(default)]
    pub write_contents_json: bool,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_source() -> PathBuf {
    PathBuf::from(DEFAULT_SOURCE)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

impl Default for IconSetConfig {
    fn default() -> Self {
        Self::for_project(default_root())
    }
}

impl IconSetConfig {
    /// Builds the conventional configuration for a project root.
    pub fn for_project(root: impl Into<PathBuf>) -> Self {
        let root_dir = root.into();
        Self {
            source_path: default_source(),
            output_dir: default_output_dir(),
            targets: TargetSpec::default_set(),
            write_contents_json: false,
            root_dir,
        }
    }

    /// Replaces the source path.
    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = path.into();
        self
    }

    /// Replaces the output directory.
    pub fn with_output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = path.into();
        self
    }

    /// Replaces the target list.
    pub fn with_targets(mut self, targets: Vec<TargetSpec>) -> Self {
        self.targets = targets;
        self
    }

    /// Enables or disables writing `Contents.json`.
    pub fn with_contents_json(mut self, enabled: bool) -> Self {
        self.write_contents_json = enabled;
        self
    }

    /// Source path, resolved against the root when relative.
    pub fn resolved_source(&self) -> PathBuf {
        self.resolve(&self.source_path)
    }

    /// Output directory, resolved against the root when relative.
    pub fn resolved_output_dir(&self) -> PathBuf {
        self.resolve(&self.output_dir)
    }

    // Absolute paths replace the root when joined.
    fn resolve(&self, path: &Path) -> PathBuf {
        self.root_dir.join(path)
    }

    /// Checks every target and rejects duplicate file names.
    pub fn validate(&self) -> Result<()> {
        if self.targets.is_empty() {
            return Err(IconError::Config("no targets configured".into()));
        }

        let mut seen = HashSet::new();
        for target in &self.targets {
            target.validate()?;
            if !seen.insert(target.identifier.as_str()) {
                return Err(IconError::Config(format!(
                    "duplicate target identifier {:?}",
                    target.identifier
                )));
            }
        }
        Ok(())
    }

    /// Serializes the config to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the config to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a config file.
    ///
    /// When the file omits `rootDir`, the directory containing the file is
    /// used as the root.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| IconError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let value: serde_json::Value = serde_json::from_str(&json)?;
        let has_root = value.get("rootDir").is_some();
        let mut config: Self = serde_json::from_value(value)?;

        if !has_root {
            if let Some(parent) = path.parent() {
                config.root_dir = parent.to_path_buf();
            }
        }
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}
