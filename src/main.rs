use anyhow::Context;
use clap::Parser;
use launcher_icons::config::LOCAL_CONFIG_FILE;
use launcher_icons::{batch, BackgroundColor, Config, PngCodec, ResvgRasterizer};
use std::path::PathBuf;
use std::process;

/// Generate launcher icon PNGs from an SVG
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// SVG artwork, overrides the config file
    #[arg(value_name = "SVG")]
    source: Option<PathBuf>,

    /// Config file (default: ./launcher-icons.toml, then the user config)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory receiving the generated icons
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Padding on each side, as a percentage of the icon size
    #[arg(short, long, value_name = "PERCENT")]
    padding: Option<f64>,

    /// Background color, #RRGGBB or #RRGGBBAA
    #[arg(short, long, value_name = "HEX")]
    background: Option<BackgroundColor>,

    /// Write a default config file and exit
    #[arg(long)]
    init: bool,

    /// Log every step
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logger(&cli);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn init_logger(cli: &Cli) {
    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.init {
        let path = cli
            .config
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE));
        if Config::create_default(&path)? {
            println!("Wrote default config to {}", path.display());
        } else {
            log::warn!("{} already exists, leaving it untouched", path.display());
        }
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::load().context("Failed to load config")?,
    };

    if let Some(source) = cli.source {
        config.source.path = source;
    }
    if let Some(output) = cli.output {
        config.output.directory = output;
    }
    if let Some(padding) = cli.padding {
        config.style.padding_percent = padding;
    }
    if let Some(background) = cli.background {
        config.style.background_color = background;
    }

    let rasterizer = ResvgRasterizer::new();
    batch::run(&config, &rasterizer, &PngCodec)?;
    Ok(())
}
