// src/utils.rs
use std::env;
use std::io;
use std::path::{Path, PathBuf};

/// Resolves `dir` against the current directory when it is relative.
///
/// # Errors
///
/// Fails when the current directory cannot be determined.
#[inline]
pub fn absolute_dir(dir: &Path) -> io::Result<PathBuf> {
    if dir.is_absolute() {
        Ok(dir.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(dir))
    }
}

/// Suffix test on the file name, so `.html` itself counts as HTML too.
#[inline]
pub fn is_html<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| {
            extensions.iter().any(|ext| {
                name.strip_suffix(ext.as_ref())
                    .is_some_and(|stem| stem.ends_with('.'))
            })
        })
}
