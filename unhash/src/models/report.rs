// src/models/report.rs
use crate::error::FixError;
use crate::models::Rename;
use std::path::PathBuf;

/// Outcome of one pass over a build directory.
#[derive(Debug, Default)]
pub struct Report {
    pub files_scanned: u64,
    pub renamed: Vec<Rename>,
    pub html_fixed: Vec<PathBuf>,
    pub references_stripped: u64,
    /// Failures recorded instead of aborting; only populated in best-effort mode.
    pub failures: Vec<FixError>,
}

impl Report {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            files_scanned: 0,
            renamed: Vec::new(),
            html_fixed: Vec::new(),
            references_stripped: 0,
            failures: Vec::new(),
        }
    }

    /// True when the pass neither renamed a file nor stripped a reference.
    #[inline]
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.renamed.is_empty() && self.references_stripped == 0
    }

    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}
