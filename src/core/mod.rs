//! core
//!
//! Domain logic for deriving deployment variables.
//!
//! # Modules
//!
//! - [`config`] - Configuration schema and loading
//! - [`naming`] - Resource naming templates and the placeholder rule
//! - [`resolve`] - Resolution of raw variables into the final output set

pub mod config;
pub mod naming;
pub mod resolve;
