//! Configuration module for slugify-rename.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{Config, OptionsConfig, CONFIG_FILE_NAME};
pub use validation::{validate_config, validate_separator};
