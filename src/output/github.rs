//! output::github
//!
//! GitHub Actions output channel.
//!
//! # Design
//!
//! GitHub Actions exposes step outputs through the file named by the
//! `GITHUB_OUTPUT` environment variable; each output is a `key=value` line,
//! and multi-line values use the heredoc delimiter form. When the variable
//! is unset (local runs), the same lines go to stdout.
//!
//! The full output set is formatted up front and appended with a single
//! write, so a failed invocation never leaves a partial set in the file.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;

use super::traits::{OutputError, Publisher};

/// Where published outputs go.
#[derive(Debug, Clone)]
enum Target {
    /// Append to the `$GITHUB_OUTPUT` file.
    File(PathBuf),
    /// Print to stdout (local runs).
    Stdout,
}

/// Publisher for the GitHub Actions output channel.
#[derive(Debug, Clone)]
pub struct GithubOutput {
    target: Target,
}

impl GithubOutput {
    /// Create a publisher from the environment.
    ///
    /// Uses the `$GITHUB_OUTPUT` file when set and non-empty, stdout
    /// otherwise.
    pub fn from_env() -> Self {
        match std::env::var("GITHUB_OUTPUT") {
            Ok(path) if !path.is_empty() => Self::to_file(PathBuf::from(path)),
            _ => Self::to_stdout(),
        }
    }

    /// Create a publisher that appends to the given output file.
    pub fn to_file(path: PathBuf) -> Self {
        GithubOutput {
            target: Target::File(path),
        }
    }

    /// Create a publisher that prints to stdout.
    pub fn to_stdout() -> Self {
        GithubOutput {
            target: Target::Stdout,
        }
    }

    /// Format the complete output set as GitHub Actions output lines.
    fn format(outputs: &[(&str, String)]) -> String {
        let mut buffer = String::new();
        for (key, value) in outputs {
            if value.contains('\n') || value.contains('\r') {
                let delimiter = heredoc_delimiter(value);
                buffer.push_str(&format!("{}<<{}\n{}\n{}\n", key, delimiter, value, delimiter));
            } else {
                buffer.push_str(&format!("{}={}\n", key, value));
            }
        }
        buffer
    }
}

/// Pick a heredoc delimiter that does not occur as a line of the value.
fn heredoc_delimiter(value: &str) -> String {
    let mut delimiter = String::from("EOF");
    while value.lines().any(|line| line == delimiter) {
        delimiter.push('_');
    }
    delimiter
}

#[async_trait]
impl Publisher for GithubOutput {
    async fn publish(&self, outputs: &[(&str, String)]) -> Result<(), OutputError> {
        let payload = Self::format(outputs);

        match &self.target {
            Target::File(path) => {
                let mut file = tokio::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .await
                    .map_err(|e| OutputError::WriteError {
                        path: path.clone(),
                        source: e,
                    })?;

                file.write_all(payload.as_bytes())
                    .await
                    .map_err(|e| OutputError::WriteError {
                        path: path.clone(),
                        source: e,
                    })?;

                file.flush().await.map_err(|e| OutputError::WriteError {
                    path: path.clone(),
                    source: e,
                })?;
            }
            Target::Stdout => {
                print!("{}", payload);
            }
        }

        Ok(())
    }
}
