//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::defaults::{BASE_URL_ENV, DEFAULT_BUILD_JOBS, WORK_DIR_ENV};
use crate::config::urls::BOOST_RELEASES;
use crate::core::install::InstallOptions;
use crate::core::platform::{BuildOptions, Platform};

/// Install Boost from source code
///
/// Downloads the release archive, runs bootstrap, then installs with b2.
/// Once installed, pass -DBOOST_ROOT=<PATH> to CMake to build against it.
#[derive(Parser, Debug)]
#[command(name = "boost-install")]
#[command(author, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Boost version to be installed, e.g. 1.76
    #[arg(short = 'v', long = "version", value_name = "VERSION")]
    pub version: String,

    /// Installation path [C:\boost\boost_<ver> | /usr/local/boost_<ver>]
    #[arg(short = 'p', long = "path", value_name = "PATH")]
    pub path: Option<String>,

    /// Number of parallel b2 jobs
    #[arg(short = 'j', long, default_value_t = DEFAULT_BUILD_JOBS)]
    pub jobs: usize,

    /// Compiler toolset passed to bootstrap and b2 (e.g. gcc, clang, msvc)
    #[arg(long)]
    pub toolset: Option<String>,

    /// Run the install step without sudo (POSIX only)
    #[arg(long)]
    pub no_sudo: bool,

    /// Remove the downloaded archive and source tree after installing
    #[arg(long)]
    pub cleanup: bool,

    /// Directory to download and extract into [default: system temp dir]
    #[arg(long, env = WORK_DIR_ENV, value_name = "DIR")]
    pub work_dir: Option<PathBuf>,

    /// Release host base URL
    #[arg(long, env = BASE_URL_ENV, default_value = BOOST_RELEASES, hide = true)]
    pub base_url: String,

    /// Enable verbose logging (--verbose for info, twice for debug)
    #[arg(long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Print a JSON install report for scripting
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Execute the install
    pub async fn run(self) -> Result<()> {
        commands::install::execute(&self.install_options()).await
    }

    /// Translate parsed arguments into pipeline options
    pub fn install_options(&self) -> InstallOptions {
        InstallOptions {
            version: self.version.clone(),
            path: self.path.clone(),
            platform: Platform::detect(),
            base_url: self.base_url.clone(),
            work_dir: self.work_dir.clone(),
            build: BuildOptions {
                jobs: self.jobs,
                toolset: self.toolset.clone(),
                elevate: !self.no_sudo,
            },
            cleanup: self.cleanup,
        }
    }
}
