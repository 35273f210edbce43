//! ANSI escape-sequence parser.
//!
//! Replays a CP437 byte stream (or pre-decoded text) through a VTE state
//! machine into a [`Canvas`], tracking cursor position and SGR attributes
//! the way a BBS terminal would. Parsing is total: malformed sequences are
//! skipped, never reported.

mod filter;
mod handlers;
mod performer;

use vte::Parser;

use crate::canvas::{Canvas, Color};
use crate::codec::cp437;

use filter::EscapeFilter;

/// Marks the end of art content; SAUCE metadata follows.
pub const EOF_MARKER: u8 = 0x1A;

/// Default canvas width when nothing else is known.
pub const DEFAULT_WIDTH: usize = 80;

/// Current SGR state applied to printed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attributes {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub blink: bool,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            fg: Color::DEFAULT_FG,
            bg: Color::DEFAULT_BG,
            bold: false,
            blink: false,
        }
    }
}

/// Cursor position. `x` may equal the width, meaning a wrap is pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Cursor {
    pub x: usize,
    pub y: usize,
}

/// Stateful ANSI parser producing a [`Canvas`].
///
/// ```
/// use bbs_ansi_art::AnsiParser;
///
/// let mut parser = AnsiParser::new(10);
/// parser.feed(b"\x1b[31mHi\x1b[0m");
/// let canvas = parser.into_canvas();
/// assert_eq!(canvas.get(0, 0).unwrap().ch, 'H');
/// ```
pub struct AnsiParser {
    width: usize,
    canvas: Canvas,
    cursor: Cursor,
    attrs: Attributes,
    saved_cursor: Option<(usize, usize)>,
    filter: EscapeFilter,
    vte: Parser,
    finished: bool,
}

impl Default for AnsiParser {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH)
    }
}

impl AnsiParser {
    /// Create a parser targeting a canvas `width` columns wide (at least 1).
    pub fn new(width: usize) -> Self {
        let width = width.max(1);
        Self {
            width,
            canvas: Canvas::new(width),
            cursor: Cursor::default(),
            attrs: Attributes::default(),
            saved_cursor: None,
            filter: EscapeFilter::default(),
            vte: Parser::new(),
            finished: false,
        }
    }

    /// Parse `data` in one go.
    pub fn parse(data: &[u8], width: usize) -> Canvas {
        let mut parser = Self::new(width);
        parser.feed(data);
        parser.into_canvas()
    }

    /// Feed raw CP437 bytes. May be called repeatedly; escape sequences
    /// split across calls are reassembled.
    ///
    /// An `0x1A` byte ends the art: the rest of `data` and any later
    /// feeds are ignored.
    pub fn feed(&mut self, data: &[u8]) {
        if self.finished {
            return;
        }
        let (content, eof) = match data.iter().position(|&b| b == EOF_MARKER) {
            Some(pos) => (&data[..pos], true),
            None => (data, false),
        };
        let text: String = content.iter().map(|&b| decode_for_parse(b)).collect();
        self.advance(&text);
        if eof {
            self.finish();
        }
    }

    /// Feed already-decoded text.
    ///
    /// Characters are normalized to the CP437 repertoire first: ASCII
    /// controls other than ESC/CR/LF/TAB show as their CP437 glyphs and
    /// characters outside CP437 become `?`.
    pub fn feed_str(&mut self, text: &str) {
        if self.finished {
            return;
        }
        let (content, eof) = match text.find(char::from(EOF_MARKER)) {
            Some(pos) => (&text[..pos], true),
            None => (text, false),
        };
        let normalized: String = content
            .chars()
            .map(|c| {
                if c.is_ascii_control() {
                    decode_for_parse(c as u8)
                } else if cp437::is_glyph(c) {
                    c
                } else {
                    char::from(cp437::SUBSTITUTE)
                }
            })
            .collect();
        self.advance(&normalized);
        if eof {
            self.finish();
        }
    }

    /// Stop accepting input. An unterminated trailing escape sequence is
    /// discarded.
    pub fn finish(&mut self) {
        self.finished = true;
        self.filter.reset();
        self.vte = Parser::new();
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn advance(&mut self, text: &str) {
        let mut filtered = String::with_capacity(text.len());
        self.filter.push(text, &mut filtered);
        let mut perf = performer::AnsiPerformer {
            canvas: &mut self.canvas,
            width: self.width,
            cursor: &mut self.cursor,
            attrs: &mut self.attrs,
            saved_cursor: &mut self.saved_cursor,
        };
        self.vte.advance(&mut perf, filtered.as_bytes());
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Cursor as `(x, y)`. A pending wrap reports the start of the next row.
    pub fn cursor(&self) -> (usize, usize) {
        if self.cursor.x >= self.width {
            (0, self.cursor.y + 1)
        } else {
            (self.cursor.x, self.cursor.y)
        }
    }

    pub fn attributes(&self) -> Attributes {
        self.attrs
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Finish parsing and hand over the canvas.
    pub fn into_canvas(self) -> Canvas {
        self.canvas
    }
}

/// Map one input byte to the char handed to the VTE state machine.
///
/// Only ESC, CR, LF and TAB stay control characters. NUL prints as a blank,
/// every other byte (including the low control range) as its CP437 glyph.
fn decode_for_parse(byte: u8) -> char {
    match byte {
        0x1B | b'\r' | b'\n' | b'\t' => char::from(byte),
        0x00 => ' ',
        _ => cp437::decode_byte(byte),
    }
}
