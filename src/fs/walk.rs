//! Lazy depth-first directory traversal.
//!
//! Directories are listed one at a time as the traversal reaches them. Each
//! directory entry is yielded after all of its descendants, so renaming
//! entries in yield order never invalidates a path that is still pending.

use std::path::{Path, PathBuf};

use futures::stream::{self, Stream};

use crate::error::{Error, Result};
use crate::fs::entry::DirEntry;
use crate::fs::provider::FileSystem;

/// Walk every entry below `root`, descendants first.
///
/// The root itself is not yielded. A listing failure is yielded as an error
/// and ends the stream.
pub fn walk_dir<'a, F>(fs: &'a F, root: &Path) -> impl Stream<Item = Result<DirEntry>> + 'a
where
    F: FileSystem + ?Sized,
{
    let state = WalkState {
        fs,
        pending_root: Some(absolute_root(root)),
        stack: Vec::new(),
    };

    stream::try_unfold(state, |mut state| async move {
        let next = state.next_entry().await?;
        Ok::<_, Error>(next.map(|entry| (entry, state)))
    })
}

fn absolute_root(root: &Path) -> PathBuf {
    std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf())
}

/// A listed directory whose children are being yielded.
struct Frame {
    children: std::vec::IntoIter<DirEntry>,
    /// Yielded once the children are exhausted; `None` for the root.
    dir: Option<DirEntry>,
}

struct WalkState<'a, F: ?Sized> {
    fs: &'a F,
    pending_root: Option<PathBuf>,
    stack: Vec<Frame>,
}

impl<F: FileSystem + ?Sized> WalkState<'_, F> {
    async fn next_entry(&mut self) -> Result<Option<DirEntry>> {
        if let Some(root) = self.pending_root.take() {
            let children = self.list(&root).await?;
            self.stack.push(Frame {
                children,
                dir: None,
            });
        }

        loop {
            let Some(frame) = self.stack.last_mut() else {
                return Ok(None);
            };

            match frame.children.next() {
                Some(entry) if entry.is_dir() => {
                    let children = self.list(&entry.path).await?;
                    self.stack.push(Frame {
                        children,
                        dir: Some(entry),
                    });
                }
                Some(entry) => return Ok(Some(entry)),
                None => {
                    if let Some(dir) = self.stack.pop().and_then(|frame| frame.dir) {
                        return Ok(Some(dir));
                    }
                }
            }
        }
    }

    async fn list(&self, dir: &Path) -> Result<std::vec::IntoIter<DirEntry>> {
        tracing::debug!("Listing {}", dir.display());
        let entries = self
            .fs
            .read_dir(dir)
            .await
            .map_err(|e| Error::read_dir(dir, e))?;
        Ok(entries.into_iter())
    }
}
