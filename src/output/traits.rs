//! output::traits
//!
//! Publisher trait definition for the CI output channel.
//!
//! # Design
//!
//! The `Publisher` trait is async because publishing involves file I/O on
//! GitHub Actions runners. It takes the complete output set in one call:
//! implementations must write it as a single operation so that a failure
//! publishes nothing rather than a partial set.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from output publishing.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The output file could not be written.
    #[error("failed to write outputs to '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The output channel rejected the publish.
    #[error("output channel unavailable: {0}")]
    Unavailable(String),
}

/// Sink for the resolved variable set.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publish the complete output set.
    ///
    /// # Errors
    ///
    /// Returns an error if the channel cannot be written; in that case no
    /// output is considered published.
    async fn publish(&self, outputs: &[(&str, String)]) -> Result<(), OutputError>;
}
