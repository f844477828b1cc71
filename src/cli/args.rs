//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Flags
//!
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--json`: Print the resolved variables as JSON instead of publishing

use clap::Parser;
use std::path::PathBuf;

/// deploy-vars - Derive deployment variables from a YAML pipeline config
#[derive(Parser, Debug)]
#[command(name = "deploy-vars")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the pipeline configuration YAML file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Print the resolved variables as a JSON object on stdout
    /// instead of publishing them to the CI output channel
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}
