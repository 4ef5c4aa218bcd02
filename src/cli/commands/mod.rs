//! CLI command implementations

pub mod install;
