// src/core/fixer.rs
mod html;
mod rename;

pub use html::fix_html_content;
pub use rename::{rename_hashed, stripped_name};

use crate::core::ignore::load_ignore_patterns;
use crate::core::scanner::enumerate;
use crate::error::{FixError, FixResult};
use crate::models::{Policy, Report};
use crate::utils::absolute_dir;
use anyhow::{Context as _, Result};
use std::path::Path;

pub const DEFAULT_HTML_EXTENSION: &str = "html";

/// How a pass over the build directory behaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOptions {
    pub policy: Policy,
    /// Report what would change without touching the filesystem
    pub dry_run: bool,
    /// File name suffixes, without the dot, whose content gets rewritten
    pub html_extensions: Vec<String>,
}

impl Default for FixOptions {
    #[inline]
    fn default() -> Self {
        Self {
            policy: Policy::default(),
            dry_run: false,
            html_extensions: vec![DEFAULT_HTML_EXTENSION.to_owned()],
        }
    }
}

/// Strips content hashes from every file name under `root` and from the
/// references inside its HTML files.
///
/// The directory is enumerated once; both passes work off that list, the
/// rename pass first.
///
/// # Errors
///
/// This function may return an error if:
/// * The ignore file cannot be read or parsed
/// * The build directory cannot be walked ([`FixError::Filesystem`])
/// * Under [`Policy::FailFast`], a rename or an HTML rewrite fails
///   ([`FixError::Rename`], [`FixError::EmptyName`], [`FixError::Io`]). Files
///   handled before the failure stay as they are.
#[inline]
pub fn fix_build(root: &Path, options: &FixOptions) -> Result<Report> {
    let root = absolute_dir(root)
        .with_context(|| format!("Failed to resolve build directory: {}", root.display()))?;
    let ignore = load_ignore_patterns(&root)?;
    let paths = enumerate(&root, &ignore)?;

    let mut report = Report::new();
    report.files_scanned = u64::try_from(paths.len()).unwrap_or(u64::MAX);

    rename_hashed(&paths, options, &mut report)?;
    fix_html_content(&paths, options, &mut report)?;

    tracing::info!(
        scanned = report.files_scanned,
        renamed = report.renamed.len(),
        html_fixed = report.html_fixed.len(),
        references_stripped = report.references_stripped,
        failures = report.failures.len(),
        dry_run = options.dry_run,
        "build directory processed"
    );
    Ok(report)
}

/// Applies the failure policy: best-effort keeps the error in the report,
/// fail-fast hands it back to abort the pass.
fn record(err: FixError, policy: Policy, report: &mut Report) -> FixResult<()> {
    if policy.keeps_going() {
        tracing::warn!(error = %err, "skipping file");
        report.failures.push(err);
        Ok(())
    } else {
        Err(err)
    }
}
