//! Configuration and constants
//!
//! Nothing is read from disk. Every value here can be overridden from the
//! command line or the environment.

pub mod defaults;
pub mod urls;
