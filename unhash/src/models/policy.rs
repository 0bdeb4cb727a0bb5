// src/models/policy.rs
use serde::Deserialize;

/// What to do when a single file cannot be renamed or rewritten.
#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Policy {
    /// Abort the whole run on the first failure.
    #[default]
    FailFast,
    /// Record the failure and carry on with the remaining files.
    BestEffort,
}

impl Policy {
    #[inline]
    #[must_use]
    pub const fn keeps_going(self) -> bool {
        matches!(self, Self::BestEffort)
    }
}
