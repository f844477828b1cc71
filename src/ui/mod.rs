//! ui
//!
//! Output formatting utilities.
//!
//! # Modules
//!
//! - [`output`] - Message formatting and display
//!
//! # Design
//!
//! All human-facing messages go through this module so machine-readable
//! output (the published key=value lines, `--json`) stays clean on stdout
//! while diagnostics go to stderr.

pub mod output;
