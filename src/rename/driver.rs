//! Rename driver: walks a tree and renames entries to their slugified names.

use std::io::Write;
use std::path::Path;

use futures::TryStreamExt;

use crate::error::{Error, Result};
use crate::fs::{renamed_path, walk_dir, DirEntry, FileSystem};
use crate::rename::state::{RenameOptions, RenamePlan, RenameStats};

/// Work out the rename for one entry, if its name is not already a slug.
pub fn plan_rename(entry: &DirEntry, options: &RenameOptions) -> Option<RenamePlan> {
    let candidate = renamed_path(&entry.path, &options.slug)?;
    if candidate == entry.path {
        return None;
    }

    Some(RenamePlan {
        from: entry.path.clone(),
        to: candidate,
    })
}

/// Rename every entry below `root` to its slugified name.
///
/// In a dry run, each planned rename is written to `out` as one
/// `<from> -> <to>` line and the tree is left alone. The first filesystem
/// error aborts the run; renames already done are kept.
pub async fn rename_tree<F, W>(
    fs: &F,
    root: &Path,
    options: &RenameOptions,
    out: &mut W,
) -> Result<RenameStats>
where
    F: FileSystem + ?Sized,
    W: Write,
{
    let mut stats = RenameStats::default();
    let mut entries = Box::pin(walk_dir(fs, root));

    while let Some(entry) = entries.try_next().await? {
        tracing::debug!("Visiting {}", entry.path.display());

        let Some(plan) = plan_rename(&entry, options) else {
            stats.record_unchanged();
            continue;
        };

        if options.dry_run {
            writeln!(out, "{}", plan)?;
        } else {
            fs.rename(&plan.from, &plan.to)
                .await
                .map_err(|e| Error::rename(&plan.from, e))?;
            tracing::info!("Renamed {}", plan);
        }
        stats.record_renamed();
    }

    Ok(stats)
}
