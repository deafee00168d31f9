//! Statistics reporting.

use crate::rename::RenameStats;

/// Log the statistics of a completed run.
///
/// Goes through tracing so stdout only ever carries dry-run lines.
pub fn log_stats(stats: &RenameStats, dry_run: bool) {
    let verb = if dry_run { "would rename" } else { "renamed" };
    tracing::info!(
        "Visited {} entries: {} {}, {} unchanged",
        stats.visited,
        verb,
        stats.renamed,
        stats.unchanged
    );
}
