//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! The pipeline configuration is a single YAML document with a required
//! top-level `variables` mapping. Loading is the invocation's only
//! suspension point: one async read, then synchronous parsing.
//!
//! Parsing is failsafe-style and happens in two stages: the [`failsafe`]
//! loader reads the document with every scalar kept as its source text
//! (no number/boolean/null resolution), then the string-only tree is
//! deserialized into the typed [`RawVariables`] schema.
//!
//! # Example
//!
//! ```no_run
//! use deploy_vars::core::config;
//! use std::path::Path;
//!
//! # tokio_test::block_on(async {
//! let vars = config::load(Path::new("config/deploy.yml")).await.unwrap();
//! println!("namespace: {}", vars.namespace);
//! # });
//! ```

pub mod failsafe;
pub mod schema;

pub use schema::{ConfigDocument, RawVariables};

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file path is required")]
    MissingPath,

    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },
}

/// Load and parse the pipeline variables from a YAML file.
///
/// # Errors
///
/// Returns an error if the path is empty, the file cannot be read, or the
/// document fails to parse (including a missing `variables` mapping).
pub async fn load(path: &Path) -> Result<RawVariables, ConfigError> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::MissingPath);
    }

    let contents =
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

    parse(&contents).map_err(|message| ConfigError::ParseError {
        path: path.to_path_buf(),
        message,
    })
}

/// Parse a configuration document under the failsafe schema.
fn parse(contents: &str) -> Result<RawVariables, String> {
    let node = failsafe::parse_str(contents).map_err(|e| e.to_string())?;
    let value = node
        .map(failsafe::to_value)
        .unwrap_or(serde_yaml::Value::Null);

    let document: ConfigDocument = serde_yaml::from_value(value).map_err(|e| e.to_string())?;
    Ok(document.variables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_parses_variables() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(
            &path,
            "variables:\n  namespace: proj\n  postfix: dev\n  environment: \"01\"\n",
        )
        .unwrap();

        let vars = load(&path).await.unwrap();
        assert_eq!(vars.namespace, "proj");
        assert_eq!(vars.postfix, "dev");
        assert_eq!(vars.environment, "01");
    }

    #[tokio::test]
    async fn empty_path_rejected() {
        let err = load(Path::new("")).await.unwrap_err();
        assert!(matches!(err, ConfigError::MissingPath));
    }

    #[tokio::test]
    async fn unreadable_file_is_read_error() {
        let temp = TempDir::new().unwrap();
        let err = load(&temp.path().join("missing.yml")).await.unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[tokio::test]
    async fn malformed_yaml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "variables: [unclosed").unwrap();

        let err = load(&path).await.unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[tokio::test]
    async fn document_without_variables_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "stages:\n  - build\n").unwrap();

        let err = load(&path).await.unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn plain_numeric_scalars_keep_source_text() {
        let vars = parse(
            "variables:\n  terraform_version: 1.50\n  environment: 01\n  postfix: 0x10\n",
        )
        .unwrap();

        // Trailing zero of a float-looking scalar survives.
        assert_eq!(vars.terraform_version, "1.50");
        // So does a leading zero and a hex-looking scalar.
        assert_eq!(vars.environment, "01");
        assert_eq!(vars.postfix, "0x10");
    }

    #[test]
    fn boolean_tokens_resolve_at_the_derive_layer() {
        let vars = parse(
            "variables:\n  enable_monitoring: true\n  enable_aml_computecluster: false\n",
        )
        .unwrap();
        assert!(vars.enable_monitoring);
        assert!(!vars.enable_aml_computecluster);

        // Null-ish tokens are falsy.
        let vars = parse("variables:\n  enable_monitoring: null\n").unwrap();
        assert!(!vars.enable_monitoring);

        let vars = parse("variables:\n  enable_monitoring: ~\n").unwrap();
        assert!(!vars.enable_monitoring);
    }

    #[test]
    fn null_token_stays_textual_in_string_fields() {
        // Failsafe schema: `null` is not resolved, the text passes through.
        let vars = parse("variables:\n  postfix: null\n").unwrap();
        assert_eq!(vars.postfix, "null");

        // An empty value is the empty string.
        let vars = parse("variables:\n  postfix:\n").unwrap();
        assert_eq!(vars.postfix, "");
    }

    #[test]
    fn empty_document_is_an_error() {
        assert!(parse("").is_err());
    }
}
