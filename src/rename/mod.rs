//! Rename module.
//!
//! Walks a directory tree and renames (or, in a dry run, reports) every entry
//! whose name differs from its slugified form.

pub mod driver;
pub mod state;

pub use driver::{plan_rename, rename_tree};
pub use state::{RenameOptions, RenamePlan, RenameStats};
