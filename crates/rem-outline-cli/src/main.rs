use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rem_outline_config::Config;
use rem_outline_engine::convert_file;

#[derive(Parser, Debug)]
#[command(
    name = "rem-outline",
    version,
    about = "Convert a block export into nested outline pages"
)]
struct Cli {
    /// Directory the pages are written to
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Export file to convert
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Log every stage of the conversion
    #[arg(short, long)]
    verbose: bool,

    /// Link nested documents as [[Page]] instead of embedding them
    #[arg(short, long)]
    page_references: bool,

    /// Config file to read instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    /// Flags win over the config file, which wins over built-in defaults.
    fn apply_to(&self, mut config: Config) -> Config {
        if let Some(output) = &self.output {
            config.output_dir = output.clone();
        }
        if let Some(input) = &self.input {
            config.input_path = input.clone();
        }
        config.verbose |= self.verbose;
        config.page_references |= self.page_references;
        config
    }
}

/// An explicit `--config` must exist; the default location is optional.
fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(config_path) => Config::load_from_path(config_path)?
            .with_context(|| format!("Config file not found: {}", config_path.display())),
        None => Ok(Config::load()?.unwrap_or_default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.apply_to(load_config(&cli)?);

    let level = if config.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    log::debug!("Using settings: {config:?}");

    let summary = convert_file(
        &config.input_path,
        &config.output_dir,
        &config.render_options(),
    )
    .with_context(|| {
        format!(
            "Failed to convert {} into {}",
            config.input_path.display(),
            config.output_dir.display()
        )
    })?;

    log::info!(
        "Wrote {} pages ({} blocks) to {}",
        summary.pages.len(),
        summary.blocks_written,
        config.output_dir.display()
    );
    if summary.skipped_roots > 0 {
        log::warn!("Skipped {} unnamed root blocks", summary.skipped_roots);
    }
    Ok(())
}
