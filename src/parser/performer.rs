//! `vte::Perform` glue between the state machine and the canvas.
//!
//! An `AnsiPerformer` only lives for one `advance` call. It borrows the
//! parser's cursor, pen and canvas, and routes each callback to the
//! handler modules.

use vte::{Params, Perform};

use super::handlers::{trace_ignored_csi, trace_ignored_esc};
use super::{Attributes, Cursor};
use crate::canvas::Canvas;

pub(crate) struct AnsiPerformer<'a> {
    pub canvas: &'a mut Canvas,
    pub width: usize,
    pub cursor: &'a mut Cursor,
    pub attrs: &'a mut Attributes,
    pub saved_cursor: &'a mut Option<(usize, usize)>,
}

/// First value of each parameter group; sub-parameters are not used by art.
fn flatten(params: &Params) -> Vec<u16> {
    params.iter().map(|group| group.first().map_or(0, |&v| v)).collect()
}

/// Repeat count for relative moves: missing or zero means one.
fn repeat(params: &[u16]) -> usize {
    match params.first() {
        Some(&n) if n > 0 => usize::from(n),
        _ => 1,
    }
}

impl AnsiPerformer<'_> {
    /// Column 0 of the row below, creating it when needed.
    pub(crate) fn wrap(&mut self) {
        self.cursor.x = 0;
        self.cursor.y += 1;
        self.canvas.ensure_row(self.cursor.y);
    }

    fn tab(&mut self) {
        let stop = (self.cursor.x / 8 + 1) * 8;
        if stop < self.width {
            self.cursor.x = stop;
        } else {
            self.wrap();
        }
    }

    /// Paint one glyph with the current pen.
    ///
    /// Wrapping is lazy. After the last column is filled the cursor sits at
    /// `width` and the following row already exists; the move down happens
    /// when the next glyph arrives.
    fn paint(&mut self, ch: char) {
        if self.cursor.x >= self.width {
            self.wrap();
        }
        let pen = *self.attrs;
        if let Ok(cell) = self.canvas.get_mut(self.cursor.x, self.cursor.y) {
            cell.ch = ch;
            cell.fg = pen.fg;
            cell.bg = pen.bg;
            cell.bold = pen.bold;
            cell.blink = pen.blink;
        }
        self.cursor.x += 1;
        if self.cursor.x == self.width {
            self.canvas.ensure_row(self.cursor.y + 1);
        }
    }
}

impl Perform for AnsiPerformer<'_> {
    fn print(&mut self, ch: char) {
        self.paint(ch);
    }

    fn execute(&mut self, byte: u8) {
        match byte {
            // Bare LF also returns to column 0 in BBS art
            b'\n' => self.wrap(),
            b'\r' => self.cursor.x = 0,
            b'\t' => self.tab(),
            _ => {}
        }
    }

    fn csi_dispatch(&mut self, raw: &Params, intermediates: &[u8], _ignore: bool, action: char) {
        // DEC private modes (ESC[?7h, ESC[?25l) never change the picture
        if intermediates.contains(&b'?') {
            return;
        }
        let params = flatten(raw);
        let arg = |i: usize| params.get(i).copied().unwrap_or(0);

        match action {
            'm' => self.handle_sgr(&params),
            'A' => self.handle_cursor_up(repeat(&params)),
            'B' => self.handle_cursor_down(repeat(&params)),
            'C' => self.handle_cursor_forward(repeat(&params)),
            'D' => self.handle_cursor_back(repeat(&params)),
            'H' | 'f' => {
                self.handle_cursor_position(usize::from(arg(0)), usize::from(arg(1)))
            }
            's' => self.handle_save_cursor(),
            'u' => self.handle_restore_cursor(),
            'J' => self.handle_erase_display(arg(0)),
            'K' => self.handle_erase_line(arg(0)),
            // Window ops and ANSI modes only matter to a live terminal
            't' | 'h' | 'l' => {}
            _ => trace_ignored_csi(action, &params, intermediates),
        }
    }

    fn esc_dispatch(&mut self, intermediates: &[u8], _ignore: bool, byte: u8) {
        match byte {
            b'7' => self.handle_save_cursor(),
            b'8' => self.handle_restore_cursor(),
            _ => trace_ignored_esc(byte, intermediates),
        }
    }
}
