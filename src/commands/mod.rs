//! Command handlers for the ansiart CLI.
//!
//! Each submodule handles one subcommand. The dispatch logic remains in
//! main.rs.

pub mod clean;
pub mod convert;
pub mod info;
pub mod view;

use std::path::Path;

use anyhow::{bail, Context, Result};

use bbs_ansi_art::config::MAX_WIDTH;
use bbs_ansi_art::{AnsiDocument, Config};

/// Load the config from `path`, or from the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            Config::load_from(path)
        }
        None => Config::load(),
    }
}

/// Reject a `--width` outside `1..=MAX_WIDTH`.
pub fn validate_width(width: Option<usize>) -> Result<()> {
    match width {
        Some(w) if !(1..=MAX_WIDTH).contains(&w) => {
            bail!("Width must be between 1 and {} (got: {})", MAX_WIDTH, w)
        }
        _ => Ok(()),
    }
}

/// Load an art file with the width precedence flag > SAUCE > config.
pub fn load_document(file: &Path, width: Option<usize>, config: &Config) -> Result<AnsiDocument> {
    validate_width(width)?;
    if !file.exists() {
        bail!("File not found: {}", file.display());
    }
    AnsiDocument::load_with(file, config.parse.default_width, width)
        .with_context(|| format!("Failed to load {}", file.display()))
}
