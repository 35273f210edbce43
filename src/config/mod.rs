//! Configuration management for ansiart

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::render::TerminalRenderer;
use crate::repair::CleanOptions;

impl Config {
    /// Get the config file path (~/.config/ansiart/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/ansiart)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load_from(&io::config_path()?)
    }

    /// Load configuration from a specific file, or defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        io::save_to(self, &io::config_path()?)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Cleaner options from the `[clean]` section
    pub fn clean_options(&self) -> CleanOptions {
        CleanOptions {
            optimize: self.clean.optimize,
            ensure_reset: self.clean.ensure_reset,
        }
    }

    /// Renderer for live display per the `[render]` section
    pub fn terminal_renderer(&self) -> TerminalRenderer {
        TerminalRenderer::new(self.render.reset_at_end)
    }
}
