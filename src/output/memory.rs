//! output::memory
//!
//! In-memory publisher for deterministic testing.
//!
//! # Design
//!
//! Records every published pair and allows injecting a failure, so tests
//! can exercise both the happy path and the no-partial-output guarantee
//! without touching the environment.
//!
//! # Example
//!
//! ```
//! use deploy_vars::output::{MemoryPublisher, Publisher};
//!
//! # tokio_test::block_on(async {
//! let publisher = MemoryPublisher::new();
//! publisher
//!     .publish(&[("namespace", "proj".to_string())])
//!     .await
//!     .unwrap();
//!
//! assert_eq!(publisher.outputs(), vec![("namespace".to_string(), "proj".to_string())]);
//! # });
//! ```

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::traits::{OutputError, Publisher};

/// In-memory publisher for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping.
#[derive(Debug, Clone, Default)]
pub struct MemoryPublisher {
    /// Internal state shared across clones.
    inner: Arc<Mutex<Inner>>,
}

/// Internal mutable state.
#[derive(Debug, Default)]
struct Inner {
    /// Published pairs, in publish order.
    outputs: Vec<(String, String)>,
    /// When set, publish fails with this message and records nothing.
    fail_with: Option<String>,
}

impl MemoryPublisher {
    /// Create an empty publisher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next publish calls fail with the given message.
    pub fn fail_with(&self, message: impl Into<String>) {
        self.inner.lock().unwrap().fail_with = Some(message.into());
    }

    /// All published pairs, in publish order.
    pub fn outputs(&self) -> Vec<(String, String)> {
        self.inner.lock().unwrap().outputs.clone()
    }
}

#[async_trait]
impl Publisher for MemoryPublisher {
    async fn publish(&self, outputs: &[(&str, String)]) -> Result<(), OutputError> {
        let mut inner = self.inner.lock().unwrap();

        if let Some(message) = &inner.fail_with {
            return Err(OutputError::Unavailable(message.clone()));
        }

        inner
            .outputs
            .extend(outputs.iter().map(|(k, v)| (k.to_string(), v.clone())));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_in_order() {
        let publisher = MemoryPublisher::new();
        publisher
            .publish(&[
                ("a", "1".to_string()),
                ("b", "2".to_string()),
            ])
            .await
            .unwrap();

        assert_eq!(
            publisher.outputs(),
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn injected_failure_records_nothing() {
        let publisher = MemoryPublisher::new();
        publisher.fail_with("disk full");

        let err = publisher
            .publish(&[("a", "1".to_string())])
            .await
            .unwrap_err();

        assert!(matches!(err, OutputError::Unavailable(_)));
        assert!(publisher.outputs().is_empty());
    }
}
