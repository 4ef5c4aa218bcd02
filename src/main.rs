//! boost-install CLI
//!
//! Entry point for the boost-install command-line application.

use anyhow::Result;
use clap::Parser;

use boost_install::cli::output::{display_error, OutputConfig};
use boost_install::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output_config = OutputConfig::new(cli.quiet, cli.json, cli.verbose);

    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(output_config.log_directive().into()),
        )
        .init();

    output_config.apply_global();

    // Run the install and handle errors
    match cli.run().await {
        Ok(()) => Ok(()),
        Err(e) => {
            display_error(&e);
            std::process::exit(1);
        }
    }
}
