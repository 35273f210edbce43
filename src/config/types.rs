//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::parser::DEFAULT_WIDTH;

/// Widest canvas a config may ask for
pub const MAX_WIDTH: usize = 1024;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parse: ParseConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub clean: CleanConfig,
}

impl Config {
    /// Check value ranges. Returns a message naming the bad field.
    pub fn validate(&self) -> Result<(), String> {
        let width = self.parse.default_width;
        if !(1..=MAX_WIDTH).contains(&width) {
            return Err(format!(
                "parse.default_width must be between 1 and {}, got {}",
                MAX_WIDTH, width
            ));
        }
        if self.clean.suffix.is_empty() {
            return Err("clean.suffix must not be empty".to_string());
        }
        Ok(())
    }
}

/// Parsing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseConfig {
    /// Canvas width for files without a SAUCE width
    #[serde(default = "default_width")]
    pub default_width: usize,
}

pub fn default_width() -> usize {
    DEFAULT_WIDTH
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            default_width: default_width(),
        }
    }
}

/// Terminal rendering configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Emit a final reset after the art
    #[serde(default = "default_true")]
    pub reset_at_end: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            reset_at_end: true,
        }
    }
}

/// Cleaner configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanConfig {
    /// Collapse redundant resets
    #[serde(default = "default_true")]
    pub optimize: bool,
    /// Append a reset when the art does not end with one
    #[serde(default = "default_true")]
    pub ensure_reset: bool,
    /// Appended to the file stem when no output path is given
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

pub fn default_suffix() -> String {
    "_clean".to_string()
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            optimize: true,
            ensure_reset: true,
            suffix: default_suffix(),
        }
    }
}

fn default_true() -> bool {
    true
}
