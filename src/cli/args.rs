//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Slugify file names below the current directory.
#[derive(Parser, Debug)]
#[command(
    name = "slugify-rename",
    version,
    about = "Rename files in a directory tree to their slugified form",
    long_about = "Recursively walks the current directory and renames every file and directory \
                  whose name differs from its slugified form.\n\n\
                  Each '.'-separated part of a name is slugified on its own, with underscores \
                  treated as spaces and letter case preserved."
)]
pub struct Args {
    /// Print planned renames instead of performing them.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Directory to walk (defaults to the current directory).
    #[arg(short = 'd', long = "directory")]
    pub directory: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long, env = "SLUGIFY_RENAME_CONFIG")]
    pub config: Option<PathBuf>,

    /// Separator placed between slug words.
    #[arg(short, long)]
    pub separator: Option<String>,

    /// Lowercase slugs instead of keeping the original letter case.
    #[arg(long)]
    pub lowercase: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(dir) = self.directory {
            config.options.directory = Some(dir);
        }

        if let Some(separator) = self.separator {
            config.options.separator = separator;
        }

        // Boolean flags (only override if set to non-default)
        if self.dry_run {
            config.options.dry_run = true;
        }

        if self.lowercase {
            config.options.maintain_case = false;
        }
    }
}
