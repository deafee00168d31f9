//! Rename options and run statistics.

use std::fmt;
use std::path::PathBuf;

use crate::fs::SlugOptions;

/// Options for a single rename run.
#[derive(Debug, Clone, Default)]
pub struct RenameOptions {
    /// Print planned renames instead of performing them.
    pub dry_run: bool,
    pub slug: SlugOptions,
}

/// A rename the driver has decided on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pub from: PathBuf,
    pub to: PathBuf,
}

impl fmt::Display for RenamePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from.display(), self.to.display())
    }
}

/// Counters for a completed run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenameStats {
    pub visited: u64,
    /// Renamed, or planned in a dry run.
    pub renamed: u64,
    pub unchanged: u64,
}

impl RenameStats {
    pub fn record_renamed(&mut self) {
        self.visited += 1;
        self.renamed += 1;
    }

    pub fn record_unchanged(&mut self) {
        self.visited += 1;
        self.unchanged += 1;
    }
}
