//! Batch generation: load the source once, then render and write each target.

use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::config::IconSetConfig;
use crate::contents::{AppIconContents, CONTENTS_FILE};
use crate::error::{IconError, Result};
use crate::icon::IconImage;
use crate::masker::IconMasker;
use crate::source::SourceImage;

/// Generates every configured icon and returns the written paths in order.
///
/// Fails with [`IconError::MissingSource`] before touching the output
/// directory when the source does not exist. The batch stops at the first
/// failing target; files already written are left in place.
pub fn generate_icon_set(config: &IconSetConfig) -> Result<Vec<PathBuf>> {
    generate_icon_set_with(config, |_, _| {})
}

/// Like [`generate_icon_set`], calling `on_written` after each PNG is saved.
pub fn generate_icon_set_with<F>(config: &IconSetConfig, mut on_written: F) -> Result<Vec<PathBuf>>
where
    F: FnMut(&IconImage, &Path),
{
    let source_path = config.resolved_source();
    if !source_path.exists() {
        return Err(IconError::MissingSource(source_path));
    }
    config.validate()?;

    let source = SourceImage::open(&source_path)?;
    let output_dir = config.resolved_output_dir();
    fs::create_dir_all(&output_dir).map_err(|source| IconError::Write {
        path: output_dir.clone(),
        source,
    })?;

    let mut masker = IconMasker::new(source);
    let mut written = Vec::with_capacity(config.targets.len() + 1);

    for target in &config.targets {
        let icon = masker.render(target)?;
        let path = output_dir.join(&target.identifier);
        save_png(&icon, &path)?;
        log::debug!("wrote {} ({}x{})", path.display(), target.edge, target.edge);
        on_written(&icon, &path);
        written.push(path);
    }

    if config.write_contents_json {
        let path = output_dir.join(CONTENTS_FILE);
        write_contents_json(config, &path)?;
        written.push(path);
    }

    Ok(written)
}

/// Encodes an icon as PNG at `path`.
pub fn save_png(icon: &IconImage, path: &Path) -> Result<()> {
    icon.data
        .save_with_format(path, ImageFormat::Png)
        .map_err(|err| match err {
            image::ImageError::IoError(source) => IconError::Write {
                path: path.to_path_buf(),
                source,
            },
            other => IconError::Encode {
                path: path.to_path_buf(),
                source: other,
            },
        })
}

fn write_contents_json(config: &IconSetConfig, path: &Path) -> Result<()> {
    let contents = AppIconContents::for_targets(&config.targets);
    let json = contents.to_json_pretty()?;
    fs::write(path, json + "\n").map_err(|source| IconError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "wrote {} ({} slots)",
        path.display(),
        contents.images.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::TargetSpec;
    use image::{Rgba, RgbaImage};

    fn project_with_logo(dir: &Path) -> IconSetConfig {
        let config = IconSetConfig::for_project(dir);
        let logo = config.resolved_source();
        fs::create_dir_all(logo.parent().unwrap()).unwrap();
        RgbaImage::from_pixel(100, 80, Rgba([20, 40, 200, 255]))
            .save(&logo)
            .unwrap();
        config
    }

    #[test]
    fn writes_targets_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let config = project_with_logo(dir.path())
            .with_targets(vec![TargetSpec::app_icon(32), TargetSpec::app_icon(16)]);

        let mut seen = Vec::new();
        let written = generate_icon_set_with(&config, |icon, _| seen.push(icon.target.edge)).unwrap();

        assert_eq!(seen, vec![32, 16]);
        assert_eq!(written.len(), 2);
        assert!(written[0].ends_with("app_icon_32.png"));
        let decoded = image::open(&written[1]).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (16, 16));
    }

    struct Recorder(std::sync::Mutex<Vec<(log::Level, String)>>);

    impl log::Log for Recorder {
        fn enabled(&self, _: &log::Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &log::Record<'_>) {
            let line = record.args().to_string();
            self.0.lock().unwrap().push((record.level(), line));
        }

        fn flush(&self) {}
    }

    static RECORDER: Recorder = Recorder(std::sync::Mutex::new(Vec::new()));

    #[test]
    fn written_files_log_at_debug() {
        // Ignored if a logger is already installed.
        let _ = log::set_logger(&RECORDER);
        log::set_max_level(log::LevelFilter::Trace);

        let dir = tempfile::tempdir().unwrap();
        let config = project_with_logo(dir.path())
            .with_targets(vec![TargetSpec::app_icon(16)])
            .with_contents_json(true);
        let written = generate_icon_set(&config).unwrap();
        let icon = written[0].display().to_string();

        let records = RECORDER.0.lock().unwrap();
        let wrote: Vec<_> = records
            .iter()
            .filter(|(_, line)| line.starts_with("wrote ") && line.contains(&icon))
            .collect();
        assert!(!wrote.is_empty());
        assert!(wrote.iter().all(|(level, _)| *level == log::Level::Debug));
        assert!(
            !records
                .iter()
                .any(|(level, line)| *level == log::Level::Info && line.starts_with("wrote "))
        );
    }

    #[test]
    fn invalid_target_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = project_with_logo(dir.path())
            .with_targets(vec![TargetSpec::app_icon(16), TargetSpec::new("zero.png", 0)]);

        let err = generate_icon_set(&config).unwrap_err();
        assert!(matches!(err, IconError::InvalidSize(0)));
        assert!(!config.resolved_output_dir().exists());
    }

    #[test]
    fn undecodable_source_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = IconSetConfig::for_project(dir.path());
        let logo = config.resolved_source();
        fs::create_dir_all(logo.parent().unwrap()).unwrap();
        fs::write(&logo, b"this is not an image").unwrap();

        let err = generate_icon_set(&config).unwrap_err();
        assert!(matches!(err, IconError::Decode { .. }), "{err}");
        assert!(!config.resolved_output_dir().exists());
    }
}
