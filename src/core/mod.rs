//! Core business logic module
//!
//! Everything that decides *what* to run lives here. Network, archive and
//! process side effects are delegated to [`crate::infra`].
//!
//! # Submodules
//!
//! - [`release`] - Version, archive name, URL and path derivation
//! - [`platform`] - POSIX/Windows command and default prefix selection
//! - [`prefix`] - Install prefix resolution and path normalization
//! - [`install`] - The fetch, extract, bootstrap, build pipeline

pub mod install;
pub mod platform;
pub mod prefix;
pub mod release;
