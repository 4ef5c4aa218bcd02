//! Release metadata
//!
//! Derives every name, URL, and path for a Boost release from the
//! user-supplied version string. All values are computed once and never
//! change afterwards.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::config::defaults::PATCH_SUFFIX;

/// Archive extension served by the release host
const ARCHIVE_EXTENSION: &str = ".tar.gz";

/// A Boost release identified by its `<major>.<minor>` version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoostRelease {
    /// Full version with dots, e.g. `1.76.0`
    version_with_dots: String,
    /// Full version with underscores, e.g. `1_76_0`
    version_with_underscore: String,
}

impl BoostRelease {
    /// Build release metadata from a version such as `1.76`
    ///
    /// The version is not validated. A malformed value yields a malformed
    /// URL that fails at fetch time.
    pub fn new(version: &str) -> Self {
        if !looks_like_release(version) {
            tracing::warn!(
                "Version '{version}' does not look like <major>.<minor>; using it as given"
            );
        }

        let version_with_dots = format!("{version}{PATCH_SUFFIX}");
        let version_with_underscore = version_with_dots.replace('.', "_");

        Self {
            version_with_dots,
            version_with_underscore,
        }
    }

    /// Version with dots, e.g. `1.76.0`
    pub fn version(&self) -> &str {
        &self.version_with_dots
    }

    /// Base name shared by the archive and its top-level directory
    pub fn base_name(&self) -> String {
        format!("boost_{}", self.version_with_underscore)
    }

    /// Archive file name, e.g. `boost_1_76_0.tar.gz`
    pub fn archive_name(&self) -> String {
        format!("{}{ARCHIVE_EXTENSION}", self.base_name())
    }

    /// Download URL below `base_url`
    pub fn download_url(&self, base_url: &str) -> String {
        format!(
            "{}/{}/source/{}",
            base_url.trim_end_matches('/'),
            self.version_with_dots,
            self.archive_name()
        )
    }

    /// Where the archive is stored inside `work_dir`
    pub fn archive_path(&self, work_dir: &Path) -> PathBuf {
        work_dir.join(self.archive_name())
    }

    /// Expected extraction directory inside `work_dir`
    pub fn extraction_dir(&self, work_dir: &Path) -> PathBuf {
        work_dir.join(self.base_name())
    }
}

/// Check whether a version has the `<major>.<minor>` shape
pub fn looks_like_release(version: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^\d+\.\d+$").expect("valid version pattern"))
        .is_match(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_versions_are_derived() {
        let release = BoostRelease::new("1.76");
        assert_eq!(release.version(), "1.76.0");
        assert_eq!(release.base_name(), "boost_1_76_0");
        assert_eq!(release.archive_name(), "boost_1_76_0.tar.gz");
    }

    #[test]
    fn test_download_url() {
        let release = BoostRelease::new("1.76");
        assert_eq!(
            release.download_url("https://boostorg.jfrog.io/artifactory/main/release"),
            "https://boostorg.jfrog.io/artifactory/main/release/1.76.0/source/boost_1_76_0.tar.gz"
        );
    }

    #[test]
    fn test_download_url_tolerates_trailing_slash() {
        let release = BoostRelease::new("1.80");
        assert_eq!(
            release.download_url("http://127.0.0.1:8080/release/"),
            "http://127.0.0.1:8080/release/1.80.0/source/boost_1_80_0.tar.gz"
        );
    }

    #[test]
    fn test_paths_live_in_work_dir() {
        let release = BoostRelease::new("1.76");
        let work = Path::new("/tmp");
        assert_eq!(
            release.archive_path(work),
            PathBuf::from("/tmp/boost_1_76_0.tar.gz")
        );
        assert_eq!(
            release.extraction_dir(work),
            PathBuf::from("/tmp/boost_1_76_0")
        );
    }

    #[test]
    fn test_malformed_version_is_used_as_given() {
        let release = BoostRelease::new("latest");
        assert_eq!(release.version(), "latest.0");
        assert_eq!(release.archive_name(), "boost_latest_0.tar.gz");
    }

    #[test]
    fn test_looks_like_release() {
        assert!(looks_like_release("1.76"));
        assert!(looks_like_release("1.100"));
        assert!(!looks_like_release("1.76.0"));
        assert!(!looks_like_release("1"));
        assert!(!looks_like_release("v1.76"));
        assert!(!looks_like_release(""));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Dots stay in the URL path, underscores only in the file name
        #[test]
        fn prop_url_keeps_dots_in_path(major in 0u32..10, minor in 0u32..200) {
            let version = format!("{major}.{minor}");
            let release = BoostRelease::new(&version);
            let url = release.download_url("https://host/release");

            let expected_path = format!("https://host/release/{major}.{minor}.0/source/");
            let expected_file = format!("boost_{major}_{minor}_0.tar.gz");
            prop_assert!(url.starts_with(&expected_path));
            prop_assert!(url.ends_with(&expected_file));
            prop_assert_eq!(url.len(), expected_path.len() + expected_file.len());
        }

        /// Extraction directory is the archive name minus its extension
        #[test]
        fn prop_extraction_dir_matches_archive(major in 0u32..10, minor in 0u32..200) {
            let release = BoostRelease::new(&format!("{major}.{minor}"));
            let dir = release.extraction_dir(Path::new("work"));
            let archive = release.archive_name();
            prop_assert_eq!(
                dir.file_name().and_then(|n| n.to_str()),
                archive.strip_suffix(".tar.gz")
            );
        }
    }
}
