//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use regex::Regex;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_separator(&config.options.separator)?;

    if let Some(dir) = &config.options.directory {
        if dir.as_os_str().is_empty() {
            return Err(Error::ConfigValidation {
                field: "directory".to_string(),
                message: "Directory cannot be empty".to_string(),
            });
        }
    }

    Ok(())
}

/// Validate the slug separator.
///
/// The separator must survive slugification unchanged, so it may only use
/// characters the slug transform never produces from words.
pub fn validate_separator(separator: &str) -> Result<()> {
    if separator.is_empty() {
        return Err(Error::ConfigValidation {
            field: "separator".to_string(),
            message: "Separator cannot be empty".to_string(),
        });
    }

    let separator_pattern = Regex::new(r"^[-_~]{1,3}$").unwrap();
    if !separator_pattern.is_match(separator) {
        return Err(Error::ConfigValidation {
            field: "separator".to_string(),
            message: format!(
                "Separator must be 1 to 3 of '-', '_', '~' (got '{}')",
                separator
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_separator() {
        assert!(validate_separator("-").is_ok());
        assert!(validate_separator("_").is_ok());
        assert!(validate_separator("--").is_ok());
        assert!(validate_separator("~").is_ok());
    }

    #[test]
    fn test_validate_separator_invalid() {
        assert!(validate_separator("").is_err());
        assert!(validate_separator(".").is_err());
        assert!(validate_separator("/").is_err());
        assert!(validate_separator("x").is_err());
        assert!(validate_separator("----").is_err());
    }

    #[test]
    fn test_validate_config_directory() {
        let mut config = Config::default();
        assert!(validate_config(&config).is_ok());

        config.options.directory = Some(PathBuf::new());
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, Error::ConfigValidation { field, .. } if field == "directory"));
    }
}
