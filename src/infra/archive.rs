//! Archive extraction
//!
//! Unpacks gzip-compressed tarballs, keeping the archive's own entry paths,
//! and reports the single top-level directory the archive unpacked into.

use flate2::read::GzDecoder;
use std::fs::File;
use std::path::{Component, Path, PathBuf};
use tar::Archive;

use crate::error::ExtractError;

/// Outcome of unpacking an archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractResult {
    /// Number of entries written
    pub entries: usize,
    /// Top-level directory shared by every entry, relative to the destination
    pub root: Option<PathBuf>,
}

/// Extract a `.tar.gz` archive under `dest_dir`
///
/// Entries keep their paths from the archive. Entries that would land outside
/// `dest_dir` are skipped by `tar` and not counted.
pub fn extract_tar_gz(archive_path: &Path, dest_dir: &Path) -> Result<ExtractResult, ExtractError> {
    std::fs::create_dir_all(dest_dir).map_err(|e| ExtractError::IoError {
        path: dest_dir.to_path_buf(),
        error: e.to_string(),
    })?;

    let mut archive = open(archive_path)?;
    let mut roots = RootTracker::default();
    let mut entries = 0;

    let iter = archive.entries().map_err(|e| corrupt(archive_path, &e))?;
    for entry in iter {
        let mut entry = entry.map_err(|e| corrupt(archive_path, &e))?;
        let entry_path = entry
            .path()
            .map_err(|e| corrupt(archive_path, &e))?
            .into_owned();

        let unpacked = entry
            .unpack_in(dest_dir)
            .map_err(|e| ExtractError::IoError {
                path: dest_dir.join(&entry_path),
                error: e.to_string(),
            })?;

        if unpacked {
            roots.observe(&entry_path);
            entries += 1;
        } else {
            tracing::warn!("Skipped archive entry outside destination: {}", entry_path.display());
        }
    }

    tracing::debug!("Extracted {entries} entries into {}", dest_dir.display());

    Ok(ExtractResult {
        entries,
        root: roots.finish(),
    })
}

fn open(archive_path: &Path) -> Result<Archive<GzDecoder<File>>, ExtractError> {
    let file = File::open(archive_path).map_err(|e| ExtractError::Open {
        path: archive_path.to_path_buf(),
        error: e.to_string(),
    })?;
    Ok(Archive::new(GzDecoder::new(file)))
}

fn corrupt(archive_path: &Path, error: &std::io::Error) -> ExtractError {
    ExtractError::Corrupt {
        path: archive_path.to_path_buf(),
        error: error.to_string(),
    }
}

/// Tracks whether every entry shares one top-level directory
///
/// A root only counts when at least one entry is nested below it, so an
/// archive holding a single flat file has no root.
#[derive(Debug, Default)]
struct RootTracker {
    root: Option<PathBuf>,
    mixed: bool,
    nested: bool,
}

impl RootTracker {
    fn observe(&mut self, path: &Path) {
        let mut normal = path.components().filter(|c| matches!(c, Component::Normal(_)));
        let Some(first) = normal.next() else {
            return;
        };
        if normal.next().is_some() {
            self.nested = true;
        }

        let first = PathBuf::from(first.as_os_str());
        match &self.root {
            None => self.root = Some(first),
            Some(existing) if *existing != first => self.mixed = true,
            Some(_) => {}
        }
    }

    fn finish(self) -> Option<PathBuf> {
        if self.mixed || !self.nested {
            None
        } else {
            self.root
        }
    }
}
