// src/core/ignore/loader.rs
use crate::core::ignore::Patterns;
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

pub const IGNORE_FILE_NAME: &str = ".unhashignore";

/// Loads ignore patterns from the first `.unhashignore` found in `dir` or one
/// of its parents.
///
/// A build directory is usually wiped and regenerated on every build, so the
/// ignore file tends to live next to it in the project rather than inside it.
///
/// # Errors
///
/// This function may return an error if:
/// * The ignore file exists but cannot be read
/// * A line contains invalid pattern syntax
#[inline]
pub fn load_ignore_patterns(dir: &Path) -> Result<Patterns> {
    let mut patterns = Patterns::new();

    let Some(ignore_file) = dir
        .ancestors()
        .map(|ancestor| ancestor.join(IGNORE_FILE_NAME))
        .find(|candidate| candidate.is_file())
    else {
        return Ok(patterns);
    };

    let content = fs::read_to_string(&ignore_file)
        .with_context(|| format!("Failed to read ignore file: {}", ignore_file.display()))?;

    for (index, line) in content.lines().enumerate() {
        patterns.add_pattern(line).with_context(|| {
            format!(
                "{}:{}: invalid ignore pattern",
                ignore_file.display(),
                index.saturating_add(1)
            )
        })?;
    }

    tracing::debug!(file = %ignore_file.display(), "loaded ignore patterns");
    Ok(patterns)
}
