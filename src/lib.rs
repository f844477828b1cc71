//! deploy-vars - Derive deployment variables from a YAML pipeline config
//!
//! deploy-vars is a single-binary tool that reads a pipeline configuration
//! file, applies default-generation rules to the resource naming fields, and
//! publishes the resulting variables as CI outputs for downstream
//! provisioning steps (Terraform remote state, Azure ML workspaces and
//! endpoints).
//!
//! # Architecture
//!
//! The codebase follows a small layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to core)
//! - [`core`] - Config schema, loading, naming templates, and resolution
//! - [`output`] - Abstraction for the CI output channel
//! - [`ui`] - Output formatting utilities
//!
//! # Correctness Invariants
//!
//! deploy-vars maintains the following invariants:
//!
//! 1. Every invocation either publishes all seventeen outputs or none
//! 2. A field already resolved upstream passes through verbatim
//! 3. Resolution is idempotent: resolving an already-resolved set is a no-op

pub mod cli;
pub mod core;
pub mod output;
pub mod ui;
