//! CLI definitions for ansiart
//!
//! This module contains the clap CLI structure definitions, separated from
//! main.rs so the command handlers can share the argument types.

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand, ValueEnum};

/// Build clap styles for help output.
///
/// - Cyan: headers, usage, command names
/// - White: placeholders and valid values
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "ansiart")]
#[command(about = "[ ansiart ] - view, clean and convert BBS-era ANSI art")]
#[command(
    long_about = "ansiart - work with BBS-era ANSI/CP437 text-mode artwork.

Reads classic .ANS files (CP437 bytes with escape sequences and an optional
SAUCE record) and UTF-8 true-color .art files.

QUICK START:
    ansiart view logo.ans              Show a file in the terminal
    ansiart info logo.ans              Show SAUCE metadata and dimensions
    ansiart clean *.ans                Strip problematic escape sequences
    ansiart convert logo.ans --to txt -o logo.txt

Configuration lives in ~/.config/ansiart/config.toml."
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Enable debug logging (ANSIART_LOG overrides)
    #[arg(long, short, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    /// Use this config file instead of ~/.config/ansiart/config.toml
    #[arg(long, global = true, value_name = "PATH", help = "Config file to use")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a file to the terminal
    #[command(long_about = "Render an art file to stdout.

The width comes from --width, then the file's SAUCE record, then
[parse].default_width in the config.

EXAMPLES:
    ansiart view logo.ans              Render with colors
    ansiart view logo.ans --plain      Characters only
    ansiart view wide.ans --fit        Cut lines to the terminal width")]
    View {
        /// File to render
        #[arg(help = "Path to the art file")]
        file: PathBuf,
        /// Canvas width in columns
        #[arg(long, short, help = "Canvas width (overrides SAUCE and config)")]
        width: Option<usize>,
        /// Print characters without colors
        #[arg(long, help = "Print characters only, no colors")]
        plain: bool,
        /// Truncate lines to the terminal width
        #[arg(long, help = "Truncate each line to the terminal width")]
        fit: bool,
    },

    /// Remove problematic escape sequences
    #[command(long_about = "Clean escape sequences that misbehave on modern terminals.

Removes window manipulation (ESC[...t) and private mode toggles
(ESC[?...h / ESC[?...l). SAUCE metadata is never touched. By default
redundant resets are collapsed and a final reset is added.

Output goes to <stem>_clean.<ext> next to each input unless -o is given
(single input only).

EXAMPLES:
    ansiart clean logo.ans                 Writes logo_clean.ans
    ansiart clean logo.ans -o fixed.ans    Writes fixed.ans
    ansiart clean *.ans --dry-run          Report without writing
    ansiart clean *.ans --json             Machine-readable report")]
    Clean {
        /// Files to clean
        #[arg(required = true, help = "Art files to clean")]
        files: Vec<PathBuf>,
        /// Output path
        #[arg(long, short, help = "Output path (single input only)")]
        output: Option<PathBuf>,
        /// Keep redundant resets
        #[arg(long, help = "Do not collapse redundant resets")]
        no_optimize: bool,
        /// Do not append a final reset
        #[arg(long, help = "Do not append a final reset")]
        no_reset: bool,
        /// Report without writing
        #[arg(long, help = "Report what would change without writing")]
        dry_run: bool,
        /// Print results as JSON
        #[arg(long, help = "Print results as JSON")]
        json: bool,
    },

    /// Show SAUCE metadata and dimensions
    #[command(long_about = "Show a file's SAUCE record and canvas dimensions.

EXAMPLES:
    ansiart info logo.ans
    ansiart info logo.ans --json")]
    Info {
        /// File to inspect
        #[arg(help = "Path to the art file")]
        file: PathBuf,
        /// Print as JSON
        #[arg(long, help = "Print as JSON")]
        json: bool,
    },

    /// Convert between formats
    #[command(long_about = "Re-serialize an art file in another format.

FORMATS:
    ans     CP437 bytes with a SAUCE record
    txt     Plain characters
    json    Runs of same-styled cells
    html    <pre> block with inline CSS colors
    art     UTF-8 true-color half blocks

EXAMPLES:
    ansiart convert logo.ans --to txt -o logo.txt
    ansiart convert logo.ans --to art -o logo.art
    ansiart convert logo.ans --to html -o logo.html")]
    Convert {
        /// File to convert
        #[arg(help = "Path to the art file")]
        file: PathBuf,
        /// Target format
        #[arg(long, value_enum, help = "Target format")]
        to: ConvertFormat,
        /// Output path
        #[arg(long, short, help = "Output path")]
        output: PathBuf,
        /// Canvas width in columns
        #[arg(long, short, help = "Canvas width (overrides SAUCE and config)")]
        width: Option<usize>,
    },
}

/// Output formats for `convert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConvertFormat {
    Ans,
    Txt,
    Json,
    Html,
    Art,
}
