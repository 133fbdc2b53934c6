//! Revenue Radar CLI - interactive yearly-spend prediction.
//!
//! This binary loads the fitted scaler/model artifact pair and serves
//! predictions to a human operator in the terminal.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use radar_cli::{Cli, Commands};

fn main() -> Result<()> {
    // Log to stderr so the interactive form owns stdout.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Predict(cmd) => cmd.run()?,
        Commands::Inspect(cmd) => cmd.run()?,
    }

    Ok(())
}
