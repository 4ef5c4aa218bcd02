//! Error types for boost-install
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Download errors
#[derive(Error, Debug)]
pub enum DownloadError {
    /// Network error
    #[error("Network error downloading '{url}': {error}")]
    NetworkError { url: String, error: String },

    /// IO error
    #[error("IO error for '{path}': {error}")]
    IoError { path: PathBuf, error: String },
}

/// Archive extraction errors
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Archive could not be opened
    #[error("Failed to open archive '{path}': {error}")]
    Open { path: PathBuf, error: String },

    /// Archive is corrupt or not a gzip-compressed tarball
    #[error("Failed to read archive '{path}': {error}")]
    Corrupt { path: PathBuf, error: String },

    /// Writing extracted entries failed
    #[error("Failed to extract into '{path}': {error}")]
    IoError { path: PathBuf, error: String },
}

/// Build stage errors
#[derive(Error, Debug)]
pub enum StageError {
    /// The stage's executable could not be started
    #[error("Failed to launch {stage} command '{command}': {error}")]
    Launch {
        stage: String,
        command: String,
        error: String,
    },

    /// The stage ran but exited unsuccessfully
    #[error("{stage} command '{command}' failed with {status}")]
    Failed {
        stage: String,
        command: String,
        status: String,
        code: Option<i32>,
    },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to remove a file
    #[error("Failed to remove file '{path}': {error}")]
    RemoveFile { path: PathBuf, error: String },

    /// Failed to remove directory
    #[error("Failed to remove directory '{path}': {error}")]
    RemoveDir { path: PathBuf, error: String },
}

/// Top-level install error type
#[derive(Error, Debug)]
pub enum InstallError {
    /// Download error
    #[error("Download error")]
    Download(#[from] DownloadError),

    /// Extraction error
    #[error("Extraction error")]
    Extract(#[from] ExtractError),

    /// Build stage error
    #[error("Build error")]
    Stage(#[from] StageError),

    /// Privilege elevation requested but the tool is missing
    #[error("'{tool}' not found on PATH. Install it or rerun with --no-sudo")]
    ElevationUnavailable { tool: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_error_names_stage_and_command() {
        let err = StageError::Failed {
            stage: "bootstrap".to_string(),
            command: "./bootstrap.sh --prefix=/opt/boost".to_string(),
            status: "exit status: 1".to_string(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("bootstrap"));
        assert!(msg.contains("./bootstrap.sh --prefix=/opt/boost"));
        assert!(msg.contains("exit status: 1"));
    }

    #[test]
    fn test_install_error_wraps_download_error() {
        let err: InstallError = DownloadError::NetworkError {
            url: "https://example.com/a.tar.gz".to_string(),
            error: "connection refused".to_string(),
        }
        .into();
        // The cause is only reachable through the source chain
        assert_eq!(err.to_string(), "Download error");
        let source = std::error::Error::source(&err).unwrap().to_string();
        assert!(source.contains("connection refused"));
    }

    #[test]
    fn test_elevation_error_suggests_flag() {
        let err = InstallError::ElevationUnavailable {
            tool: "sudo".to_string(),
        };
        assert!(err.to_string().contains("--no-sudo"));
    }
}
