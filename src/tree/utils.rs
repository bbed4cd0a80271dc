//! Shared utility functions for tree walking

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TreeError};

/// Make `path` absolute against the current directory and clean it lexically.
/// Symlinks are not resolved.
pub fn resolve_root(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path).map_err(|source| TreeError::Resolve {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(path_clean::clean(absolute))
}

/// Get the display name of a path. A filesystem root has no base name and
/// is shown as the whole path.
pub fn get_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Dot-files are never listed. A lossy conversion keeps a leading `.` intact,
/// so this also holds for names that are not valid UTF-8.
pub fn is_hidden(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

/// List the immediate entries of `dir`, sorted by file name, without
/// dot-files.
pub fn list_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_dir_error = |source| TreeError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(dir)
        .map_err(read_dir_error)?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(read_dir_error)?;
    entries.sort_by_key(|a| a.file_name());

    Ok(entries
        .into_iter()
        .filter(|entry| !is_hidden(&entry.file_name()))
        .map(|entry| entry.path())
        .collect())
}
