//! Filesystem access used by the walker and the rename driver.

use std::io;
use std::path::Path;

use async_trait::async_trait;

use crate::fs::entry::{DirEntry, EntryKind};

/// Directory listing and rename-by-path.
///
/// Errors are plain [`io::Error`]s; callers attach the operation and path.
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// List the direct children of `dir`, in whatever order the platform returns them.
    async fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirEntry>>;

    /// Rename the object at `from` to `to`.
    async fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// The local filesystem, through `tokio::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

#[async_trait]
impl FileSystem for LocalFs {
    async fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirEntry>> {
        let mut read_dir = tokio::fs::read_dir(dir).await?;
        let mut entries = Vec::new();

        while let Some(entry) = read_dir.next_entry().await? {
            let kind = EntryKind::from(entry.file_type().await?);
            entries.push(DirEntry::new(dir.join(entry.file_name()), kind));
        }

        Ok(entries)
    }

    async fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        // POSIX rename silently replaces the target; refuse instead
        if tokio::fs::symlink_metadata(to).await.is_ok() && !is_case_only_rename(from, to) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("target already exists: {}", to.display()),
            ));
        }

        tokio::fs::rename(from, to).await
    }
}

/// True when `to` only changes the letter case of `from`'s name and both
/// resolve to the same object, as on a case-insensitive filesystem.
///
/// Hard links with differently spelled names do not qualify.
pub fn is_case_only_rename(from: &Path, to: &Path) -> bool {
    if from.parent() != to.parent() {
        return false;
    }

    let (Some(from_name), Some(to_name)) = (from.file_name(), to.file_name()) else {
        return false;
    };
    if !from_name
        .to_string_lossy()
        .eq_ignore_ascii_case(&to_name.to_string_lossy())
    {
        return false;
    }

    same_file::is_same_file(from, to).unwrap_or(false)
}
