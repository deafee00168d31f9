//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use crate::fs::{SlugOptions, DEFAULT_SEPARATOR};
use crate::rename::RenameOptions;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the per-user configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub options: OptionsConfig,
}

/// Rename options configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionsConfig {
    /// Print planned renames instead of performing them.
    #[serde(default)]
    pub dry_run: bool,

    /// Separator placed between slug words.
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Whether to keep the original letter case.
    #[serde(default = "default_true")]
    pub maintain_case: bool,

    /// Directory to walk instead of the working directory.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            dry_run: false,
            separator: default_separator(),
            maintain_case: true,
            directory: None,
        }
    }
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Config(format!("Failed to read {}: {}", path.display(), e))
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Per-user configuration file location, if the platform has one.
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "slugify-rename")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load the explicit config file if given, else the per-user file if
    /// present, else defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        Self::resolve_with(explicit, Self::user_config_path().as_deref())
    }

    fn resolve_with(explicit: Option<&Path>, user_config: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match user_config {
            Some(path) if path.is_file() => {
                tracing::debug!("Using config file {}", path.display());
                Self::load(path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Get the effective root directory.
    pub fn root_directory(&self) -> PathBuf {
        self.options
            .directory
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// Options for the rename driver.
    pub fn rename_options(&self) -> RenameOptions {
        RenameOptions {
            dry_run: self.options.dry_run,
            slug: SlugOptions {
                maintain_case: self.options.maintain_case,
                separator: self.options.separator.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_partial_file_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[options]\ndry_run = true\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert!(config.options.dry_run);
        assert!(config.options.maintain_case);
        assert_eq!(config.options.separator, "-");
        assert_eq!(config.options.directory, None);
    }

    #[test]
    fn test_load_full_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            "[options]\nseparator = \"_\"\nmaintain_case = false\ndirectory = \"/srv/files\"\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        let options = config.rename_options();
        assert!(!options.dry_run);
        assert!(!options.slug.maintain_case);
        assert_eq!(options.slug.separator, "_");
        assert_eq!(config.root_directory(), PathBuf::from("/srv/files"));
    }

    #[test]
    fn test_load_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = Config::resolve(Some(tmp.path().join("nope.toml").as_path())).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_resolve_without_files_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let absent = tmp.path().join("config.toml");

        let config = Config::resolve_with(None, Some(absent.as_path())).unwrap();
        assert!(!config.options.dry_run);
        assert!(config.options.maintain_case);
        assert_eq!(config.options.separator, "-");

        let config = Config::resolve_with(None, None).unwrap();
        assert_eq!(config.options.directory, None);
    }

    #[test]
    fn test_resolve_prefers_explicit_file() {
        let tmp = TempDir::new().unwrap();
        let user = tmp.path().join("user.toml");
        let explicit = tmp.path().join("explicit.toml");
        fs::write(&user, "[options]\nseparator = \"~\"\n").unwrap();
        fs::write(&explicit, "[options]\nseparator = \"_\"\n").unwrap();

        let config = Config::resolve_with(None, Some(user.as_path())).unwrap();
        assert_eq!(config.options.separator, "~");
        let config = Config::resolve_with(Some(explicit.as_path()), Some(user.as_path())).unwrap();
        assert_eq!(config.options.separator, "_");
    }

    #[test]
    fn test_load_unreadable_path_is_config_error() {
        let tmp = TempDir::new().unwrap();
        // A directory exists but cannot be read as a file
        let err = Config::load(tmp.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[options\n").unwrap();
        assert!(matches!(Config::load(&path), Err(Error::TomlParse(_))));
    }
}
