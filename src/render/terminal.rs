//! Canvas to ANSI escape sequences.
//!
//! SGR codes are only emitted when an attribute differs from what the
//! terminal already has, so a run of same-colored cells costs one sequence.

use super::Render;
use crate::ansi_text::RESET;
use crate::canvas::{Canvas, Cell, Color};

/// Attribute state the terminal is known to be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SgrState {
    fg: Color,
    bg: Color,
    bold: bool,
    blink: bool,
    reverse: bool,
}

impl Default for SgrState {
    fn default() -> Self {
        Self {
            fg: Color::DEFAULT_FG,
            bg: Color::DEFAULT_BG,
            bold: false,
            blink: false,
            reverse: false,
        }
    }
}

impl SgrState {
    /// Parameters moving the terminal from `self` to `cell`, updating `self`.
    fn transition(&mut self, cell: &Cell) -> Vec<String> {
        let mut params = Vec::new();
        if cell.bold != self.bold {
            params.push(if cell.bold { "1" } else { "22" }.to_string());
            self.bold = cell.bold;
        }
        if cell.blink != self.blink {
            params.push(if cell.blink { "5" } else { "25" }.to_string());
            self.blink = cell.blink;
        }
        if cell.reverse != self.reverse {
            params.push(if cell.reverse { "7" } else { "27" }.to_string());
            self.reverse = cell.reverse;
        }
        if cell.fg != self.fg {
            params.push(cell.fg.fg_params());
            self.fg = cell.fg;
        }
        if cell.bg != self.bg {
            params.push(cell.bg.bg_params());
            self.bg = cell.bg;
        }
        params
    }

    /// True when carrying this state past the end of a row would show.
    fn bleeds(&self) -> bool {
        self.bg != Color::DEFAULT_BG || self.bold || self.blink || self.reverse || self.fg.is_rgb()
    }
}

/// Render a canvas as a stream of characters and SGR sequences.
///
/// Rows are joined with `\n`; trailing default cells are omitted. No
/// cursor movement codes are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalRenderer {
    /// End with a reset (live display wants one, file output does not).
    /// No second reset is added when the last row already closed with one.
    pub reset_at_end: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self { reset_at_end: true }
    }
}

impl TerminalRenderer {
    pub fn new(reset_at_end: bool) -> Self {
        Self { reset_at_end }
    }

    /// Renderer for bytes going to a file: no trailing reset.
    pub fn for_file() -> Self {
        Self::new(false)
    }
}

impl Render for TerminalRenderer {
    fn render(&self, canvas: &Canvas) -> String {
        let mut state = SgrState::default();
        let mut lines = Vec::with_capacity(canvas.height());

        for row in canvas.rows() {
            let mut line = String::new();
            let used = row.iter().rposition(|c| !c.is_default()).map_or(0, |x| x + 1);

            for cell in &row[..used] {
                let params = state.transition(cell);
                if !params.is_empty() {
                    line.push_str("\x1b[");
                    line.push_str(&params.join(";"));
                    line.push('m');
                }
                line.push(cell.ch);
            }

            if state.bleeds() {
                line.push_str(RESET);
                state = SgrState::default();
            }
            lines.push(line);
        }

        let mut out = lines.join("\n");
        if self.reset_at_end && !out.ends_with(RESET) {
            out.push_str(RESET);
        }
        out
    }
}
