// src/core/scanner.rs
use crate::core::ignore::{IGNORE_FILE_NAME, Patterns};
use crate::error::{FixError, FixResult};
use crate::utils::absolute_dir;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};


/// Lists every file below `root`, recursively.
///
/// Directories are not listed and symlinked directories are not followed; a
/// symlink pointing at a file is listed like the file itself. Files matched
/// by `ignore` are left out. Entries are sorted by file name within each
/// directory so that runs are reproducible.
///
/// # Errors
///
/// Returns [`FixError::Filesystem`] if:
/// * `root` does not exist or is not a directory
/// * `root` or one of its subdirectories cannot be read
#[inline]
pub fn enumerate(root: &Path, ignore: &Patterns) -> FixResult<Vec<PathBuf>> {
    let root = absolute_dir(root).map_err(|source| FixError::Filesystem {
        path: root.to_path_buf(),
        source,
    })?;

    let metadata = fs::metadata(&root).map_err(|source| FixError::Filesystem {
        path: root.clone(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(FixError::Filesystem {
            path: root,
            source: io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(&root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !should_exclude(e, &root, ignore))
    {
        let entry = entry.map_err(|err| walk_error(&root, err))?;
        if is_file(&entry) {
            files.push(entry.into_path());
        }
    }

    tracing::debug!(root = %root.display(), files = files.len(), "enumerated build directory");
    Ok(files)
}

fn should_exclude(entry: &DirEntry, root: &Path, ignore: &Patterns) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    if entry.file_type().is_file() && entry.file_name() == IGNORE_FILE_NAME {
        return true;
    }

    let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
    if ignore.matches(relative) {
        tracing::debug!(path = %relative.display(), "ignored");
        return true;
    }
    false
}

fn is_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

fn walk_error(root: &Path, err: walkdir::Error) -> FixError {
    let path = err
        .path()
        .map_or_else(|| root.to_path_buf(), Path::to_path_buf);
    FixError::Filesystem {
        path,
        source: io::Error::from(err),
    }
}
