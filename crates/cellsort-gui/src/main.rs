mod app;
mod convert;
mod events;
mod panels;
mod states;
mod summary;

use std::path::PathBuf;

use anyhow::{Context, Result};
use cellsort_core::config::SessionConfig;
use cellsort_core::input::list_images;
use cellsort_core::output::OutputSession;
use cellsort_core::session::Session;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cellsort", about = "Label grid cells of images and export them as crops")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Folder containing the images to label
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Base folder for session output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Grid rows
    #[arg(long)]
    rows: Option<u32>,

    /// Grid columns
    #[arg(long)]
    cols: Option<u32>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    if cli.print_config {
        print!("{}", toml::to_string_pretty(&SessionConfig::default())?);
        return Ok(());
    }

    let config = load_config(&cli)?;
    config.validate()?;

    let images = list_images(&config.input, &config.extensions)
        .with_context(|| format!("Failed to list images in {}", config.input.display()))?;
    tracing::info!("{} images found in {}", images.len(), config.input.display());

    let output = OutputSession::create_now(&config.output, &config.label_names())
        .with_context(|| format!("Failed to create output session in {}", config.output.display()))?;

    let window_title = format!("cellsort - {}", config.input.display());
    let mut session = Session::new(config, images, output);
    let opening = session.begin();
    if session.is_finished() {
        summary::print_session_summary(&session);
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([640.0, 480.0])
            .with_resizable(true)
            .with_title(window_title),
        ..Default::default()
    };

    eframe::run_native(
        "cellsort",
        options,
        Box::new(move |_cc| Ok(Box::new(app::CellsortApp::new(session, opening)))),
    )
    .map_err(|e| anyhow::anyhow!("Display error: {e}"))
}

/// Defaults, then the config file, then command-line overrides.
fn load_config(cli: &Cli) -> Result<SessionConfig> {
    let mut config = match cli.config {
        Some(ref path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        }
        None => SessionConfig::default(),
    };

    if let Some(ref input) = cli.input {
        config.input = input.clone();
    }
    if let Some(ref output) = cli.output {
        config.output = output.clone();
    }
    if let Some(rows) = cli.rows {
        config.grid.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.grid.cols = cols;
    }
    Ok(config)
}
