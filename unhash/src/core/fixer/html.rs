// src/core/fixer/html.rs
use super::{FixOptions, record};
use crate::core::hash::{count_hashes, strip_all_hashes};
use crate::error::{FixError, FixResult};
use crate::models::Report;
use crate::utils::is_html;
use std::collections::HashMap;
use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Strips every hash segment from the HTML files among `paths`.
///
/// Whether a file is HTML is judged on the enumerated path, before any
/// rename. A page the rename pass already moved is read from its new location,
/// looked up in `report.renamed`. Every HTML file is rewritten and printed as
/// `HTML fixed at {path}`, matched or not.
///
/// # Errors
///
/// Under fail-fast, returns the first [`FixError::Io`]: the file could not be
/// read as UTF-8 text or could not be written back.
#[inline]
pub fn fix_html_content(
    paths: &[PathBuf],
    options: &FixOptions,
    report: &mut Report,
) -> FixResult<()> {
    // A dry run moved nothing, so every page is still where it was found.
    let moved: HashMap<PathBuf, PathBuf> = if options.dry_run {
        HashMap::new()
    } else {
        report
            .renamed
            .iter()
            .map(|r| (r.from.clone(), r.to.clone()))
            .collect()
    };

    for path in paths {
        if !is_html(path, &options.html_extensions) {
            continue;
        }
        let current = moved.get(path).unwrap_or(path);

        match fix_one(current, options.dry_run) {
            Ok(stripped) => {
                if options.dry_run {
                    println!("Would fix HTML at {}", current.display());
                } else {
                    println!("HTML fixed at {}", current.display());
                }
                tracing::debug!(path = %current.display(), stripped, "html rewritten");
                report.references_stripped = report.references_stripped.saturating_add(stripped);
                report.html_fixed.push(current.clone());
            }
            Err(err) => record(err, options.policy, report)?,
        }
    }

    Ok(())
}

fn fix_one(path: &Path, dry_run: bool) -> FixResult<u64> {
    let io_error = |source| FixError::Io {
        path: path.to_path_buf(),
        source,
    };

    let content = fs::read_to_string(path).map_err(io_error)?;
    let stripped = u64::try_from(count_hashes(&content)).unwrap_or(u64::MAX);

    if !dry_run {
        let fixed = strip_all_hashes(&content);
        write_in_place(path, fixed.as_bytes()).map_err(io_error)?;
    }
    Ok(stripped)
}

/// Replaces the content of `path` through a temporary sibling file, so the
/// page is never left half written. The original permissions are kept, and a
/// symlinked page is written through to its target.
fn write_in_place(path: &Path, content: &[u8]) -> io::Result<()> {
    let target = if path.is_symlink() {
        fs::canonicalize(path)?
    } else {
        path.to_path_buf()
    };
    let permissions = fs::metadata(&target)?.permissions();
    let dir = target
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(content)?;
    file.as_file().set_permissions(permissions)?;
    file.as_file().sync_all()?;
    file.persist(&target).map_err(|err| err.error)?;
    Ok(())
}
