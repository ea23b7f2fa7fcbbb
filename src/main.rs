use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rounded_iconset::{IconError, IconSetConfig, generate_icon_set_with};

/// Generate macOS-style rounded app icons from a project's logo.
///
/// With no arguments, reads `assets/images/logo.png` under the current
/// directory and writes the seven `app_icon_<N>.png` files into
/// `macos/Runner/Assets.xcassets/AppIcon.appiconset`.
#[derive(Debug, Parser)]
#[command(name = "rounded-iconset", version, about)]
struct Cli {
    /// Project root the conventional paths are derived from.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// JSON config file; overrides the conventional layout.
    #[arg(long, conflicts_with = "root")]
    config: Option<PathBuf>,

    /// Source logo (PNG, JPEG or SVG).
    #[arg(long)]
    source: Option<PathBuf>,

    /// Directory to write the icons into.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Also write the asset catalog Contents.json.
    #[arg(long)]
    contents_json: bool,
}

impl Cli {
    fn into_config(self) -> Result<IconSetConfig, IconError> {
        let mut config = match self.config {
            Some(path) => IconSetConfig::load(path)?,
            None => IconSetConfig::for_project(self.root),
        };
        if let Some(source) = self.source {
            config = config.with_source(source);
        }
        if let Some(output) = self.output {
            config = config.with_output_dir(output);
        }
        if self.contents_json {
            config = config.with_contents_json(true);
        }
        Ok(config)
    }
}

const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    ExitCode::from(run(Cli::parse()))
}

/// Runs one generation and maps the outcome to a process exit status.
fn run(cli: Cli) -> u8 {
    let config = match cli.into_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("❌ {err}");
            return EXIT_FAILURE;
        }
    };

    let source = config.resolved_source();
    let output_dir = config.resolved_output_dir();

    println!("📦 Source icon: {}", source.display());
    println!("📁 Output directory: {}", output_dir.display());
    println!();

    let result = generate_icon_set_with(&config, |icon, path| {
        let edge = icon.target.edge;
        println!("✅ Generated {edge}x{edge} icon: {}", path.display());
    });

    match result {
        Ok(written) => {
            println!();
            println!("🎉 Rounded macOS icons generated ({} files)", written.len());
            println!("💡 Rebuild the app to pick up the new icons:");
            println!("   flutter clean && flutter run -d macos");
            EXIT_SUCCESS
        }
        Err(IconError::MissingSource(path)) => {
            eprintln!("❌ Source icon not found: {}", path.display());
            EXIT_FAILURE
        }
        Err(err) => {
            eprintln!("❌ {err}");
            EXIT_FAILURE
        }
    }
}
