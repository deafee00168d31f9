//! Filename decomposition into slug chunks.

use std::path::{Path, PathBuf};

use crate::fs::slug::{slugify, SlugOptions};

/// Slugify a single `.`-delimited chunk of a filename.
///
/// Underscores count as word breaks.
pub fn slugify_chunk(chunk: &str, options: &SlugOptions) -> String {
    slugify(&chunk.replace('_', " "), options)
}

/// Slugify each `.`-delimited chunk of `name` and rejoin them.
///
/// Empty chunks are kept, so `.hidden` stays `.hidden` and `a..b` keeps both dots.
pub fn slugify_file_name(name: &str, options: &SlugOptions) -> String {
    name.split('.')
        .map(|chunk| slugify_chunk(chunk, options))
        .collect::<Vec<_>>()
        .join(".")
}

/// Candidate path for `path`: same parent, slugified file name.
///
/// Returns `None` for paths without a file name (such as `/`).
pub fn renamed_path(path: &Path, options: &SlugOptions) -> Option<PathBuf> {
    let name = path.file_name()?.to_string_lossy();
    let parent = path.parent().unwrap_or(Path::new(""));
    Some(parent.join(slugify_file_name(&name, options)))
}
