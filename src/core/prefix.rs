//! Install prefix resolution
//!
//! Picks the directory Boost is installed under and renders it as the
//! `--prefix=<path>` argument shared by both build stages.

use std::fmt;

use serde::Serialize;

use crate::core::platform::Platform;

/// A normalized install prefix
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallPrefix {
    path: String,
}

impl InstallPrefix {
    /// Resolve the prefix from an optional user path
    ///
    /// Without a path the platform default for `version` is used. The result
    /// is always normalized. Writability is not checked.
    pub fn resolve(path: Option<&str>, version: &str, platform: Platform) -> Self {
        let raw = match path {
            Some(p) if !p.is_empty() => p.to_string(),
            _ => platform.default_prefix(version),
        };

        let path = normalize_path(&raw, platform);
        tracing::debug!("Resolved install prefix '{raw}' -> '{path}'");
        Self { path }
    }

    /// The `--prefix=<path>` argument
    pub fn argument(&self) -> String {
        format!("--prefix={}", self.path)
    }
}

impl fmt::Display for InstallPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// Lexically normalize a path for `platform`
///
/// Collapses repeated separators, drops `.` components and folds `..` into
/// the preceding component. A leading `..` is kept on relative paths and
/// dropped on rooted ones. Windows paths keep their drive letter or
/// `\\server\share` prefix and are written with `\`. On POSIX exactly two
/// leading slashes are kept, as POSIX leaves their meaning to the
/// implementation. An empty result becomes `.`.
pub fn normalize_path(path: &str, platform: Platform) -> String {
    let sep = platform.separator();

    let (drive, rest) = match platform {
        Platform::Windows => split_drive(path),
        Platform::Posix => ("", path),
    };

    let rooted = rest.chars().next().is_some_and(|c| platform.is_separator(c));
    let root = match platform {
        Platform::Posix if rest.starts_with("//") && !rest.starts_with("///") => "//".to_string(),
        _ if rooted => sep.to_string(),
        _ => String::new(),
    };

    let mut components: Vec<&str> = Vec::new();
    for component in rest.split(|c: char| platform.is_separator(c)) {
        match component {
            "" | "." => {}
            ".." => match components.last() {
                Some(&last) if last != ".." => {
                    components.pop();
                }
                None if rooted => {}
                _ => components.push(".."),
            },
            other => components.push(other),
        }
    }

    let mut normalized = String::with_capacity(path.len());
    normalized.extend(
        drive
            .chars()
            .map(|c| if platform.is_separator(c) { sep } else { c }),
    );
    normalized.push_str(&root);
    normalized.push_str(&components.join(sep.to_string().as_str()));

    if normalized.is_empty() {
        normalized.push('.');
    }
    normalized
}

/// Split the drive part from a Windows path
///
/// The drive is either a leading `X:` or a UNC `\\server\share` prefix.
fn split_drive(path: &str) -> (&str, &str) {
    let bytes = path.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        return path.split_at(2);
    }

    let is_sep = |c: char| Platform::Windows.is_separator(c);
    let mut chars = path.chars();
    let unc = chars.next().is_some_and(is_sep)
        && chars.next().is_some_and(is_sep)
        && !chars.next().is_some_and(is_sep);
    if !unc {
        return ("", path);
    }

    // `path[2..]` starts with the server name
    let Some(server_len) = path[2..].find(is_sep) else {
        return (path, "");
    };
    let share_start = 2 + server_len + 1;
    let share = &path[share_start..];
    if share.starts_with(is_sep) {
        return ("", path);
    }
    let end = share.find(is_sep).map_or(path.len(), |len| share_start + len);
    path.split_at(end)
}
