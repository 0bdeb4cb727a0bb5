// src/core/fixer/rename.rs
use super::{FixOptions, record};
use crate::core::hash::strip_name_hashes;
use crate::error::{FixError, FixResult};
use crate::models::{Rename, Report};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// The file name of `path` with its hash segments removed, or `None`
/// when the name carries no hash. Names that are not valid UTF-8 are never
/// considered hashed.
#[inline]
#[must_use]
pub fn stripped_name(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    strip_name_hashes(name)
}

/// Renames every hashed file in `paths` to its stripped name, in the same
/// directory. Paths without a hash are left alone.
///
/// Each rename is printed as `Rename {old} to {new}` and recorded in
/// `report.renamed`. In dry-run mode nothing is moved; collisions between
/// planned names are still detected.
///
/// # Errors
///
/// Under fail-fast, returns the first failure: [`FixError::Rename`] when the
/// target already exists or the filesystem refused the rename, and
/// [`FixError::EmptyName`] when nothing is left of the name.
#[inline]
pub fn rename_hashed(paths: &[PathBuf], options: &FixOptions, report: &mut Report) -> FixResult<()> {
    let mut claimed: HashSet<PathBuf> = HashSet::new();

    for path in paths {
        let Some(name) = stripped_name(path) else {
            if path.file_name().and_then(|n| n.to_str()).is_none() {
                tracing::debug!(path = %path.display(), "skipping non UTF-8 file name");
            }
            continue;
        };

        match rename_one(path, &name, options.dry_run, &claimed) {
            Ok(rename) => {
                if options.dry_run {
                    println!("Would rename {} to {}", rename.from.display(), rename.to.display());
                } else {
                    println!("Rename {} to {}", rename.from.display(), rename.to.display());
                }
                claimed.insert(rename.to.clone());
                report.renamed.push(rename);
            }
            Err(err) => record(err, options.policy, report)?,
        }
    }

    Ok(())
}

fn rename_one(
    path: &Path,
    name: &str,
    dry_run: bool,
    claimed: &HashSet<PathBuf>,
) -> FixResult<Rename> {
    if name.is_empty() {
        return Err(FixError::EmptyName {
            path: path.to_path_buf(),
        });
    }

    let target = path.with_file_name(name);
    // A stripped name never carries a hash, so no target can be another
    // rename's source: what is on disk now is what a real run would find.
    // symlink_metadata so a dangling symlink still counts as taken.
    if claimed.contains(&target) || fs::symlink_metadata(&target).is_ok() {
        return Err(FixError::rename_collision(path.to_path_buf(), target));
    }

    if !dry_run {
        fs::rename(path, &target).map_err(|source| FixError::Rename {
            from: path.to_path_buf(),
            to: target.clone(),
            source,
        })?;
    }

    Ok(Rename {
        from: path.to_path_buf(),
        to: target,
    })
}
