//! Filesystem operations
//!
//! Work directory lookup and post-install cleanup.

use std::path::{Path, PathBuf};

use crate::error::FilesystemError;

/// Directory archives are downloaded and extracted into
///
/// Falls back to the system temp directory when no override is given. A
/// relative override is anchored at the current directory, since the build
/// stages run with the source tree as their working directory.
pub fn work_dir(override_dir: Option<&Path>) -> PathBuf {
    let dir = override_dir.map_or_else(std::env::temp_dir, Path::to_path_buf);
    if dir.is_absolute() {
        return dir;
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(dir),
        Err(e) => {
            tracing::warn!("Cannot resolve {} against the current directory: {e}", dir.display());
            dir
        }
    }
}

/// Remove a file if it exists
pub fn remove_file(path: &Path) -> Result<(), FilesystemError> {
    if path.exists() {
        std::fs::remove_file(path).map_err(|e| FilesystemError::RemoveFile {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
    }
    Ok(())
}

/// Remove a directory and all its contents
pub fn remove_dir_all(path: &Path) -> Result<(), FilesystemError> {
    if path.exists() {
        std::fs::remove_dir_all(path).map_err(|e| FilesystemError::RemoveDir {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
    }
    Ok(())
}
