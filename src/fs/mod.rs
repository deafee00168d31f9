//! Filesystem module.
//!
//! Provides:
//! - Directory listing and renaming behind the [`FileSystem`] trait
//! - Lazy depth-first traversal
//! - Slugification of filenames

pub mod entry;
pub mod naming;
pub mod provider;
pub mod slug;
pub mod walk;

pub use entry::{DirEntry, EntryKind};
pub use naming::{renamed_path, slugify_chunk, slugify_file_name};
pub use provider::{FileSystem, LocalFs};
pub use slug::{slugify, SlugOptions, DEFAULT_SEPARATOR};
pub use walk::walk_dir;
