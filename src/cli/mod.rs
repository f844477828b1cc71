//! cli
//!
//! Command-line interface layer for deploy-vars.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and flags
//! - Drive the load → resolve → publish sequence
//! - Does NOT format outputs for the channel itself
//!
//! The CLI layer is thin. It parses arguments via clap and hands the
//! configuration path plus a [`Publisher`] to [`derive`], which performs the
//! whole invocation. Any failure bubbles up to `main.rs`, where it becomes
//! the single terminal failure signal.

pub mod args;

pub use args::Cli;

use anyhow::{Context as _, Result};
use std::path::Path;

use crate::core::config;
use crate::core::resolve::ResolvedConfig;
use crate::output::{GithubOutput, Publisher};
use crate::ui;
use crate::ui::output::Verbosity;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub async fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);

    if cli.json {
        // Local debugging aid: print the resolved set, publish nothing.
        let resolved = load_resolved(&cli.config).await?;
        println!("{}", serde_json::to_string_pretty(&resolved)?);
        return Ok(());
    }

    let publisher = GithubOutput::from_env();
    let resolved = derive(&cli.config, &publisher, verbosity).await?;

    ui::output::success(
        format!("published {} outputs", resolved.outputs().len()),
        verbosity,
    );
    Ok(())
}

/// Load the config and resolve the variables. Shared by both the publish
/// and `--json` paths so failures carry the same context.
async fn load_resolved(config_path: &Path) -> Result<ResolvedConfig> {
    let raw = config::load(config_path)
        .await
        .context("Failed to load configuration")?;
    Ok(ResolvedConfig::from_raw(&raw))
}

/// Perform one full invocation: load the config, resolve the variables,
/// and publish the complete output set.
///
/// Publishing happens only after resolution succeeds, so a failing
/// invocation publishes nothing.
pub async fn derive(
    config_path: &Path,
    publisher: &dyn Publisher,
    verbosity: Verbosity,
) -> Result<ResolvedConfig> {
    ui::output::debug(
        format!("reading config from '{}'", config_path.display()),
        verbosity,
    );

    let resolved = load_resolved(config_path).await?;
    let outputs = resolved.outputs();

    ui::output::debug(format!("publishing {} outputs", outputs.len()), verbosity);

    publisher
        .publish(&outputs)
        .await
        .context("Failed to publish outputs")?;

    Ok(resolved)
}
