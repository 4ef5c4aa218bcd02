//! boost-install - Build and install Boost from source
//!
//! Downloads a Boost release archive, unpacks it, and drives Boost's own
//! `bootstrap` and `b2` tools to install it under a prefix.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Release metadata, platform commands and the install pipeline
//! - [`infra`] - Infrastructure layer (network, archives, filesystem, processes)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
