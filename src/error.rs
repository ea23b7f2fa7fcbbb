//! Error type shared by every stage of icon generation.

use std::path::PathBuf;

/// Convenience alias used throughout the crate.
pub type Result<T, E = IconError> = std::result::Result<T, E>;

/// Everything that can stop an icon set from being produced.
///
/// None of these are retried; a run ends at the first one.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("source image not found: {}", .0.display())]
    MissingSource(PathBuf),

    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to parse SVG {}: {message}", .path.display())]
    Svg { path: PathBuf, message: String },

    #[error("source image has no pixels")]
    EmptySource,

    #[error("invalid icon edge length {0}: must be at least 1 pixel")]
    InvalidSize(u32),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IconError {
    /// Returns true when the run stopped because the source file is absent.
    pub fn is_missing_source(&self) -> bool {
        matches!(self, Self::MissingSource(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_path() {
        let err = IconError::MissingSource(PathBuf::from("assets/images/logo.png"));
        assert!(err.to_string().contains("assets/images/logo.png"));
        assert!(err.is_missing_source());

        let err = IconError::InvalidSize(0);
        assert!(err.to_string().contains('0'));
        assert!(!err.is_missing_source());
    }
}
