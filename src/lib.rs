//! slugify-rename - rename files in a directory tree to their slugified form
//!
//! This library walks a directory tree and renames every entry whose name
//! differs from its slugified form.
//!
//! # Features
//!
//! - Lazy, depth-first traversal (children before their directory)
//! - Per-chunk slugification: `My_File.TXT` becomes `My-File.TXT`
//! - Dry-run mode that only prints the planned renames
//! - Pluggable filesystem access through the [`FileSystem`] trait
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use slugify_rename::{rename_tree, LocalFs, RenameOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let options = RenameOptions {
//!         dry_run: true,
//!         ..RenameOptions::default()
//!     };
//!     let mut stdout = std::io::stdout();
//!     let stats = rename_tree(&LocalFs, Path::new("."), &options, &mut stdout).await?;
//!     println!("{} entries would be renamed", stats.renamed);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod output;
pub mod rename;

// Re-exports for convenience
pub use config::Config;
pub use error::{Error, Result};
pub use fs::{slugify, walk_dir, DirEntry, FileSystem, LocalFs, SlugOptions};
pub use rename::{rename_tree, RenameOptions, RenamePlan, RenameStats};
