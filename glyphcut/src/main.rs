//! Command-line front end for the icon extractor.

use anyhow::{Context, Result};
use clap::Parser;
use glyphcut::{ExtractOptions, IconExtractor, parse_hex_color};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Extract icons from a screenshot into recolored transparent PNGs
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// Screenshot to extract icons from
    #[arg(value_hint = clap::ValueHint::FilePath)]
    input: PathBuf,

    /// Directory the icons are written to
    #[arg(default_value = "./output", value_hint = clap::ValueHint::DirPath)]
    output_dir: PathBuf,

    /// TOML file with extraction options
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Icon color as #rrggbb
    #[arg(long)]
    color: Option<String>,

    /// Merge boxes closer than this many pixels
    #[arg(long)]
    gap: Option<i32>,

    /// Margin around each cropped icon
    #[arg(long)]
    padding: Option<i32>,

    /// Log every pipeline step
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Defaults, then the config file, then command-line flags.
    fn options(&self) -> Result<ExtractOptions> {
        let mut options = match &self.config {
            Some(path) => ExtractOptions::from_toml_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => ExtractOptions::default(),
        };

        if let Some(color) = &self.color {
            options.target_color = parse_hex_color(color)?;
        }
        if let Some(gap) = self.gap {
            options.gap = gap;
        }
        if let Some(padding) = self.padding {
            options.padding = padding;
        }
        options.validate()?;
        Ok(options)
    }
}

fn setup_logging(verbose: bool) -> Result<()> {
    let base_level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(base_level))
        .context("invalid log filter")?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()
        .context("logger initialization failed")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    let extractor = IconExtractor::new(cli.options()?);
    extractor
        .extract_to_dir(&cli.input, &cli.output_dir)
        .with_context(|| format!("icon extraction from {} failed", cli.input.display()))?;
    Ok(())
}
