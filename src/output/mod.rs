//! output
//!
//! Abstraction for the CI output channel.
//!
//! # Architecture
//!
//! The `Publisher` trait defines the interface for publishing the resolved
//! variable set to the surrounding pipeline. The CLI uses
//! [`GithubOutput::from_env`] rather than writing to the channel directly,
//! so the derivation logic can be tested against the in-memory mock.
//!
//! Publishing is all-or-nothing: the complete output set is written in a
//! single operation, so a failed invocation never leaves partial output.
//!
//! # Modules
//!
//! - `traits`: Core `Publisher` trait and error type
//! - [`github`]: GitHub Actions implementation (`$GITHUB_OUTPUT` file)
//! - [`memory`]: In-memory implementation for deterministic testing

pub mod github;
pub mod memory;
pub mod traits;

pub use github::GithubOutput;
pub use memory::MemoryPublisher;
pub use traits::{OutputError, Publisher};
