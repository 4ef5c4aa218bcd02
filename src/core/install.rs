//! Install pipeline
//!
//! Resolves release metadata, downloads and extracts the archive, then runs
//! Boost's bootstrap and build stages. Stages run strictly in order and the
//! first failure aborts everything after it.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::output::{self, create_download_bar, create_spinner, print_field};
use crate::config::urls::BOOST_RELEASES;
use crate::core::platform::{BuildOptions, Platform, StageCommand};
use crate::core::prefix::InstallPrefix;
use crate::core::release::BoostRelease;
use crate::error::InstallError;
use crate::infra::archive::extract_tar_gz;
use crate::infra::download::{DownloadManager, ProgressCallback};
use crate::infra::filesystem;
use crate::infra::process::{run_stage, BuildStage, StageOutput};

/// Everything one install run needs
#[derive(Debug, Clone)]
pub struct InstallOptions {
    /// `<major>.<minor>` version, e.g. `1.76`
    pub version: String,
    /// Install prefix; platform default when `None`
    pub path: Option<String>,
    /// Platform whose commands and paths are used
    pub platform: Platform,
    /// Release host base URL
    pub base_url: String,
    /// Download/extract directory; system temp directory when `None`
    pub work_dir: Option<PathBuf>,
    /// Options forwarded to the build tool
    pub build: BuildOptions,
    /// Remove the archive and source tree after a successful install
    pub cleanup: bool,
}

impl InstallOptions {
    /// Options for `version` with every other setting at its default
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            path: None,
            platform: Platform::detect(),
            base_url: BOOST_RELEASES.to_string(),
            work_dir: None,
            build: BuildOptions::default(),
            cleanup: false,
        }
    }
}

/// Install plan: every value derived before any side effect
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallPlan {
    /// Full version, e.g. `1.76.0`
    pub version: String,
    /// Platform the commands target
    pub platform: Platform,
    /// Directory the archive is downloaded and extracted into
    pub work_dir: PathBuf,
    /// Archive download URL
    pub url: String,
    /// Local archive path
    pub archive_path: PathBuf,
    /// Source tree location assumed from the version
    pub expected_source_dir: PathBuf,
    /// Install prefix
    pub prefix: InstallPrefix,
    /// Bootstrap stage command
    pub bootstrap: StageCommand,
    /// Build/install stage command
    pub build: StageCommand,
}

impl InstallPlan {
    /// Derive the plan from options without touching the network or disk
    pub fn resolve(options: &InstallOptions) -> Self {
        let release = BoostRelease::new(&options.version);
        let work_dir = filesystem::work_dir(options.work_dir.as_deref());
        let prefix = InstallPrefix::resolve(
            options.path.as_deref(),
            release.version(),
            options.platform,
        );
        let prefix_arg = prefix.argument();

        Self {
            version: release.version().to_string(),
            platform: options.platform,
            url: release.download_url(&options.base_url),
            archive_path: release.archive_path(&work_dir),
            expected_source_dir: release.extraction_dir(&work_dir),
            bootstrap: options.platform.bootstrap_command(&prefix_arg, &options.build),
            build: options.platform.build_command(&prefix_arg, &options.build),
            prefix,
            work_dir,
        }
    }
}

/// Summary of a completed install
#[derive(Debug, Clone, Serialize)]
pub struct InstallReport {
    /// The plan that was carried out
    #[serde(flatten)]
    pub plan: InstallPlan,
    /// Directory the build stages ran in
    pub source_dir: PathBuf,
    /// Bytes downloaded
    pub archive_size: u64,
    /// Entries unpacked from the archive
    pub extracted_entries: usize,
    /// Whether the archive and source tree were removed afterwards
    pub cleaned_up: bool,
}

/// Run the whole install pipeline
pub async fn install(options: &InstallOptions) -> Result<InstallReport, InstallError> {
    let plan = InstallPlan::resolve(options);
    tracing::info!(
        "Installing Boost {} on {} into {}",
        plan.version,
        plan.platform,
        plan.prefix
    );
    print_field("Temp directory", plan.work_dir.display());

    if let Some(tool) = plan.platform.elevation_tool(&options.build) {
        if which::which(tool).is_err() {
            return Err(InstallError::ElevationUnavailable {
                tool: tool.to_string(),
            });
        }
    }

    // Fetch
    print_field(
        "Downloading",
        format!("{} into {}", plan.url, plan.archive_path.display()),
    );
    let archive_size = fetch(&plan.url, &plan.archive_path).await?;

    // Extract
    print_field("Extracting", plan.archive_path.display());
    let spinner = create_spinner("Extracting archive...");
    let extracted = extract_tar_gz(&plan.archive_path, &plan.work_dir);
    spinner.finish_and_clear();
    let extracted = extracted?;
    let source_dir = source_dir(&plan, extracted.root.as_deref());
    print_field("Source directory", source_dir.display());

    // Build
    let stage_output = if output::is_silent() {
        StageOutput::Stderr
    } else {
        StageOutput::Inherit
    };
    print_field("Install path", &plan.prefix);
    print_field("Bootstrap command", &plan.bootstrap);
    run_stage(BuildStage::Bootstrap, &plan.bootstrap, &source_dir, stage_output).await?;

    print_field("Build command", &plan.build);
    run_stage(BuildStage::Install, &plan.build, &source_dir, stage_output).await?;

    let cleaned_up = options.cleanup && cleanup(&plan.archive_path, &source_dir);

    output::print_success(&format!("Boost {} installed to {}", plan.version, plan.prefix));

    Ok(InstallReport {
        plan,
        source_dir,
        archive_size,
        extracted_entries: extracted.entries,
        cleaned_up,
    })
}

/// Remove the archive and source tree after a successful install
///
/// Failures are logged and leave the install successful. An elevated build
/// can leave root-owned output in the source tree.
fn cleanup(archive_path: &Path, source_dir: &Path) -> bool {
    tracing::info!("Removing {} and {}", archive_path.display(), source_dir.display());
    let results = [
        filesystem::remove_file(archive_path),
        filesystem::remove_dir_all(source_dir),
    ];

    let mut clean = true;
    for err in results.into_iter().filter_map(Result::err) {
        tracing::warn!("Cleanup incomplete: {err}");
        clean = false;
    }
    clean
}

async fn fetch(url: &str, dest: &Path) -> Result<u64, InstallError> {
    let bar = create_download_bar(0);
    let bar_handle = bar.clone();
    let progress: ProgressCallback = Box::new(move |downloaded, total| {
        if total > 0 {
            bar_handle.set_length(total);
        }
        bar_handle.set_position(downloaded);
    });

    let result = DownloadManager::new().download(url, dest, Some(progress)).await;
    bar.finish_and_clear();
    Ok(result?.size)
}

/// Pick the directory the build stages run in
///
/// The archive's own top-level directory wins. Archives without a single
/// root fall back to the name derived from the version.
fn source_dir(plan: &InstallPlan, archive_root: Option<&Path>) -> PathBuf {
    match archive_root {
        Some(root) => {
            let actual = plan.work_dir.join(root);
            if actual != plan.expected_source_dir {
                tracing::warn!(
                    "Archive unpacked into {} instead of {}",
                    actual.display(),
                    plan.expected_source_dir.display()
                );
            }
            actual
        }
        None => {
            tracing::warn!(
                "Archive has no single top-level directory, assuming {}",
                plan.expected_source_dir.display()
            );
            plan.expected_source_dir.clone()
        }
    }
}
