//! Output module for console output.
//!
//! Provides:
//! - Colored error line on stderr
//! - Statistics reporting

pub mod console;
pub mod stats;

pub use console::print_error;
pub use stats::log_stats;
