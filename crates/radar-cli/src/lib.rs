//! Revenue Radar CLI library.
//!
//! This crate provides the command-line interface for Revenue Radar:
//!
//! - **Predict**: interactive prediction session (or a one-shot prediction
//!   when all three metrics are passed as flags)
//! - **Inspect**: show what the artifact files in a models directory contain
//!
//! # Example
//!
//! ```bash
//! # Start the interactive session against ./models
//! radar predict
//!
//! # One-shot prediction
//! radar predict --avg-session-length 34.5 --time-on-app 12.8 --length-of-membership 4.2
//!
//! # Inspect artifacts in a custom directory
//! radar inspect --models-dir /srv/revenue-radar/models
//! ```

pub mod commands;

use clap::{Parser, Subcommand};

pub use commands::{InspectCommand, PredictCommand};

/// Revenue Radar - predict yearly customer spend from usage metrics
///
/// Loads a pre-fitted scaler and regression model from a models directory
/// and serves predictions interactively in the terminal.
#[derive(Parser, Debug)]
#[command(name = "radar")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Predict yearly customer spend (interactive unless all metrics are given)
    Predict(PredictCommand),

    /// Inspect the artifacts in a models directory
    Inspect(InspectCommand),
}

/// Result type alias for CLI operations
pub type CliResult<T> = anyhow::Result<T>;
