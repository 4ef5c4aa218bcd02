//! CLI implementation of the install run
//!
//! Runs the pipeline and renders its report.

use anyhow::{Context, Result};

use crate::cli::output;
use crate::core::install::{install, InstallOptions};

/// Execute the install
pub async fn execute(options: &InstallOptions) -> Result<()> {
    let report = install(options)
        .await
        .with_context(|| format!("Failed to install Boost {}", options.version))?;

    tracing::debug!(
        "Downloaded {} bytes, extracted {} entries",
        report.archive_size,
        report.extracted_entries
    );

    if output::is_json() {
        let rendered =
            serde_json::to_string_pretty(&report).context("Failed to serialize install report")?;
        println!("{rendered}");
    } else if !output::is_silent() {
        if !report.cleaned_up {
            println!(
                "  Sources kept in {} (use --cleanup to remove)",
                report.source_dir.display()
            );
        }
        println!("  Build against it with -DBOOST_ROOT={}", report.plan.prefix);
    }

    Ok(())
}
