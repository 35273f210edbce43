//! View command handler

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use terminal_size::{terminal_size, Width};

use bbs_ansi_art::ansi_text;
use bbs_ansi_art::parser::DEFAULT_WIDTH;
use bbs_ansi_art::Config;

use super::load_document;

/// Terminal width in columns, or 80 when stdout is not a terminal.
pub fn terminal_columns() -> usize {
    terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(DEFAULT_WIDTH)
}

/// Cut every line to `columns` visible characters.
///
/// With `reset`, each cut line ends in a reset and the attributes the
/// renderer carried into the next line are replayed at its start.
pub fn fit_lines(rendered: &str, columns: usize, reset: bool) -> String {
    let mut carried = String::new();
    let mut was_cut = false;
    let mut out = Vec::new();
    for line in rendered.lines() {
        let mut fitted = ansi_text::truncate(line, columns, reset);
        if was_cut && !carried.is_empty() {
            fitted.insert_str(0, &carried);
        }
        was_cut = reset && ansi_text::visible_len(line) > columns;
        carried = ansi_text::active_sgr(&format!("{carried}{line}"));
        out.push(fitted);
    }
    out.join("\n")
}

/// Render a file to stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: &Path, width: Option<usize>, plain: bool, fit: bool, config: &Config) -> Result<()> {
    let doc = load_document(file, width, config)?;

    let rendered = if plain {
        doc.render_text()
    } else {
        doc.render_with(&config.terminal_renderer())
    };
    let output = if fit {
        fit_lines(&rendered, terminal_columns(), !plain)
    } else {
        rendered
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output)?;
    Ok(())
}
