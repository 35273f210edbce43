//! Escape-aware operations on rendered ANSI strings.
//!
//! Rendered lines interleave escape sequences with visible characters.
//! These helpers measure, cut and splice such strings by visible column
//! while treating every escape sequence as an atomic, zero-width token.
//! A cut never lands inside a sequence.

/// Full SGR reset.
pub const RESET: &str = "\x1b[0m";

const ESC: char = '\x1b';

/// A piece of a rendered string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A complete (or unterminated trailing) escape sequence.
    Escape(&'a str),
    /// One visible character.
    Char(char),
}

/// Iterator splitting a string into [`Token`]s.
pub struct Tokens<'a> {
    rest: &'a str,
}

/// Tokenize `s` into escape sequences and visible characters.
///
/// A CSI sequence runs from `ESC [` through its final byte (`@` to `~`).
/// One missing its final byte swallows the rest of the string. `ESC`
/// followed by anything else is a two-character sequence.
pub fn tokens(s: &str) -> Tokens<'_> {
    Tokens { rest: s }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let mut chars = self.rest.char_indices();
        let (_, first) = chars.next()?;
        if first != ESC {
            self.rest = &self.rest[first.len_utf8()..];
            return Some(Token::Char(first));
        }

        let end = match chars.next() {
            None => self.rest.len(),
            Some((_, '[')) => chars
                .find(|&(_, c)| ('@'..='~').contains(&c))
                .map(|(j, c)| j + c.len_utf8())
                .unwrap_or(self.rest.len()),
            Some((i, c)) => i + c.len_utf8(),
        };
        let (escape, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(Token::Escape(escape))
    }
}

/// Number of visible characters in `s`.
pub fn visible_len(s: &str) -> usize {
    tokens(s)
        .filter(|t| matches!(t, Token::Char(_)))
        .count()
}

/// `s` with every escape sequence removed.
pub fn strip_escapes(s: &str) -> String {
    tokens(s)
        .filter_map(|t| match t {
            Token::Char(c) => Some(c),
            Token::Escape(_) => None,
        })
        .collect()
}

/// Cut `s` to at most `max_width` visible characters.
///
/// Escape sequences before the cut are kept whole. When characters were
/// actually dropped and `reset` is set, [`RESET`] is appended so the cut
/// color does not bleed into whatever follows. A string that already
/// fits is returned unchanged.
pub fn truncate(s: &str, max_width: usize, reset: bool) -> String {
    if visible_len(s) <= max_width {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut vis = 0;
    for token in tokens(s) {
        match token {
            Token::Escape(seq) => out.push_str(seq),
            Token::Char(c) => {
                if vis == max_width {
                    break;
                }
                out.push(c);
                vis += 1;
            }
        }
    }
    if reset {
        out.push_str(RESET);
    }
    out
}

/// Append `fill` until `s` is `width` visible characters wide.
pub fn pad_to_width(s: &str, width: usize, fill: char) -> String {
    let current = visible_len(s);
    let mut out = s.to_string();
    out.extend(std::iter::repeat(fill).take(width.saturating_sub(current)));
    out
}

/// Truncate (with reset) or pad with spaces to exactly `width` visible characters.
pub fn truncate_and_pad(s: &str, width: usize) -> String {
    if visible_len(s) > width {
        truncate(s, width, true)
    } else {
        pad_to_width(s, width, ' ')
    }
}

/// Visible columns `[start, end)` of `s`.
///
/// SGR sequences in effect at `start` (since the last reset) are replayed
/// as a prefix so the slice renders with the right colors on its own.
/// Sequences between sliced characters are kept in place. Sequences after
/// the last sliced character are kept only when no visible text follows
/// them in `s`.
pub fn slice_by_visible(s: &str, start: usize, end: usize) -> String {
    if start >= end {
        return String::new();
    }

    let mut prefix = String::new();
    let mut body = String::new();
    let mut trailing = String::new();
    let mut vis = 0;
    let mut more_text = false;

    for token in tokens(s) {
        match token {
            Token::Escape(seq) if vis < start => track_sgr(&mut prefix, seq),
            Token::Escape(seq) if vis < end => body.push_str(seq),
            Token::Escape(seq) => trailing.push_str(seq),
            Token::Char(_) if vis >= end => {
                more_text = true;
                break;
            }
            Token::Char(c) => {
                if vis >= start {
                    body.push(c);
                }
                vis += 1;
            }
        }
    }

    prefix.push_str(&body);
    if !more_text {
        prefix.push_str(&trailing);
    }
    prefix
}

/// SGR sequences still in effect at the end of `s`, oldest first.
///
/// Everything before the last reset is dropped, so an empty result means
/// the terminal is back at default attributes.
pub fn active_sgr(s: &str) -> String {
    let mut state = String::new();
    for token in tokens(s) {
        if let Token::Escape(seq) = token {
            track_sgr(&mut state, seq);
        }
    }
    state
}

/// Splice `insert` into `s` at visible column `pos`.
///
/// The insert lands right before the character at `pos`, after any escape
/// sequences leading up to it. `pos` at or past the end appends.
pub fn insert_at_visible(s: &str, pos: usize, insert: &str) -> String {
    let mut out = String::with_capacity(s.len() + insert.len());
    let mut vis = 0;
    let mut inserted = false;
    for token in tokens(s) {
        match token {
            Token::Escape(seq) => out.push_str(seq),
            Token::Char(c) => {
                if vis == pos && !inserted {
                    out.push_str(insert);
                    inserted = true;
                }
                out.push(c);
                vis += 1;
            }
        }
    }
    if !inserted {
        out.push_str(insert);
    }
    out
}

fn track_sgr(state: &mut String, seq: &str) {
    if !is_sgr(seq) {
        return;
    }
    if sgr_starts_with_reset(seq) {
        state.clear();
    }
    if !is_pure_reset(seq) {
        state.push_str(seq);
    }
}

fn sgr_params(seq: &str) -> Option<&str> {
    seq.strip_prefix("\x1b[")?.strip_suffix('m')
}

fn is_sgr(seq: &str) -> bool {
    sgr_params(seq).is_some()
}

fn is_zero(param: &str) -> bool {
    param.bytes().all(|b| b == b'0')
}

fn sgr_starts_with_reset(seq: &str) -> bool {
    sgr_params(seq)
        .and_then(|p| p.split(';').next())
        .is_some_and(is_zero)
}

fn is_pure_reset(seq: &str) -> bool {
    sgr_params(seq).is_some_and(|p| p.split(';').all(is_zero))
}
