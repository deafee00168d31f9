//! Error types for the slugify-rename application.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Filesystem operation that produced an [`Error::Filesystem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsOperation {
    /// Listing the contents of a directory.
    ReadDir,
    /// Renaming an entry to its slugified name.
    Rename,
}

impl fmt::Display for FsOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FsOperation::ReadDir => write!(f, "read directory"),
            FsOperation::Rename => write!(f, "rename"),
        }
    }
}

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // File system errors
    #[error("Failed to {op} '{}': {source}", .path.display())]
    Filesystem {
        op: FsOperation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Wrap an IO error raised while listing `path`.
    pub fn read_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Filesystem {
            op: FsOperation::ReadDir,
            path: path.into(),
            source,
        }
    }

    /// Wrap an IO error raised while renaming `path`.
    pub fn rename(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Filesystem {
            op: FsOperation::Rename,
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Filesystem { .. } => exit_codes::FILESYSTEM_ERROR,
            Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
                exit_codes::CONFIG_ERROR
            }
            Error::Io(_) => exit_codes::UNEXPECTED_ERROR,
        }
    }

    /// Underlying OS error kind for filesystem failures.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Error::Filesystem { source, .. } | Error::Io(source) => Some(source.kind()),
            _ => None,
        }
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FILESYSTEM_ERROR: i32 = 1;
    pub const CONFIG_ERROR: i32 = 3;
    pub const UNEXPECTED_ERROR: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn test_filesystem_error_message() {
        let err = Error::rename(
            "/tmp/a b.txt",
            std::io::Error::new(ErrorKind::AlreadyExists, "target exists"),
        );
        assert_eq!(
            err.to_string(),
            "Failed to rename '/tmp/a b.txt': target exists"
        );
        assert_eq!(err.io_kind(), Some(ErrorKind::AlreadyExists));
    }

    #[test]
    fn test_exit_codes() {
        let fs_err = Error::read_dir("/x", std::io::Error::from(ErrorKind::PermissionDenied));
        assert_eq!(fs_err.exit_code(), exit_codes::FILESYSTEM_ERROR);
        assert_eq!(fs_err.exit_code(), 1);

        let config_err = Error::ConfigValidation {
            field: "separator".into(),
            message: "bad".into(),
        };
        assert_eq!(config_err.exit_code(), exit_codes::CONFIG_ERROR);
        assert_eq!(Error::Config("x".into()).exit_code(), 3);

        let toml_err = toml::from_str::<toml::Value>("[broken").unwrap_err();
        assert_eq!(Error::TomlParse(toml_err).exit_code(), 3);

        let io_err = Error::Io(std::io::Error::from(ErrorKind::BrokenPipe));
        assert_eq!(io_err.exit_code(), exit_codes::UNEXPECTED_ERROR);
    }

    #[test]
    fn test_config_error_has_no_io_kind() {
        let err = Error::Config("missing".into());
        assert_eq!(err.io_kind(), None);
    }
}
