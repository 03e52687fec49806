//! # ObjectWriter
//!
//! A small editor for Python scripts: preview what a script prints and
//! package it into a standalone executable.
//!
//! ```bash
//! # Run the editor
//! cargo run
//!
//! # Open a script at startup
//! cargo run -- path/to/script.py
//!
//! # Use a specific interpreter
//! cargo run -- --python python3
//! ```

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use objectwriter_core::Config;
use objectwriter_ui::{run, Flags};

/// ObjectWriter - write, preview and package Python scripts
#[derive(Parser, Debug)]
#[command(name = "objectwriter")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Script to open
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Python interpreter used for previews and installing the packager
    #[arg(long, value_name = "PROG")]
    python: Option<String>,

    /// Editor font size
    #[arg(long, value_name = "N")]
    font_size: Option<f32>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> tracing::Level {
    match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}

/// Reads the config file and applies command line overrides.
fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load(),
    };

    if let Some(python) = &args.python {
        config.interpreter.program = python.clone();
        config.installer.program = python.clone();
    }
    if let Some(size) = args.font_size {
        anyhow::ensure!(size > 0.0, "Font size must be positive, got {}", size);
        config.editor.font_size = size;
    }

    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(args.verbose).to_string()));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true),
        )
        .with(filter)
        .init();

    tracing::info!("Starting ObjectWriter v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&args)?;
    tracing::debug!("Using interpreter {}", config.interpreter.program);

    let flags = Flags {
        file: args.file,
        config,
    };

    run(flags).map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
