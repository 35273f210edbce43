//! Escape filtering ahead of the VTE state machine.
//!
//! BBS art only speaks CSI. A stray `ESC ]` or `ESC P` would put `vte` into
//! an OSC/DCS string state and swallow the rest of the picture, so only
//! CSI sequences (and the DEC `ESC 7`/`ESC 8` cursor save/restore) are let
//! through. Any other ESC is dropped on its own and the byte after it is
//! handled as ordinary input.
//!
//! CSI sequences are collected here in full before being forwarded. That
//! keeps split feeds working and lets over-long SGR lists be cut into
//! several sequences that fit `vte`'s parameter limit.

const ESC: char = '\x1b';

/// Parameters `vte` keeps per sequence; anything past this is dropped.
pub(crate) const MAX_PARAMS: usize = 32;

#[derive(Debug, Default)]
enum State {
    #[default]
    Ground,
    Escape,
    Csi(String),
}

/// Incremental filter; state survives between feeds.
#[derive(Debug, Default)]
pub(crate) struct EscapeFilter {
    state: State,
}

impl EscapeFilter {
    /// Filter `text`, appending what `vte` should see to `out`.
    pub fn push(&mut self, text: &str, out: &mut String) {
        for ch in text.chars() {
            self.state = match std::mem::take(&mut self.state) {
                State::Ground if ch == ESC => State::Escape,
                State::Ground => {
                    out.push(ch);
                    State::Ground
                }
                State::Escape => match ch {
                    '[' => State::Csi(String::new()),
                    '7' | '8' => {
                        out.push(ESC);
                        out.push(ch);
                        State::Ground
                    }
                    ESC => State::Escape,
                    _ => {
                        out.push(ch);
                        State::Ground
                    }
                },
                State::Csi(mut body) => match ch {
                    '@'..='~' => {
                        forward_csi(&body, ch, out);
                        State::Ground
                    }
                    ' '..='?' => {
                        body.push(ch);
                        State::Csi(body)
                    }
                    // Anything else inside a sequence is junk
                    _ => State::Csi(body),
                },
            };
        }
    }

    /// Drop a pending, unterminated sequence.
    pub fn reset(&mut self) {
        self.state = State::Ground;
    }
}

fn forward_csi(body: &str, action: char, out: &mut String) {
    let count = body.split([';', ':']).count();
    if action == 'm' && count > MAX_PARAMS {
        for chunk in sgr_chunks(body) {
            push_csi(&chunk, 'm', out);
        }
    } else {
        push_csi(body, action, out);
    }
}

fn push_csi(body: &str, action: char, out: &mut String) {
    out.push(ESC);
    out.push('[');
    out.push_str(body);
    out.push(action);
}

/// Split an SGR parameter list into lists of at most [`MAX_PARAMS`].
///
/// SGR applies left to right, so consecutive pieces have the same effect
/// as the whole. `38`/`48` extended colors are never split apart.
fn sgr_chunks(body: &str) -> Vec<String> {
    let fields: Vec<&str> = body.split(';').collect();
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut i = 0;
    while i < fields.len() {
        let end = (i + extended_len(&fields[i..])).min(fields.len());
        let group = &fields[i..end];
        if !current.is_empty() && current.len() + group.len() > MAX_PARAMS {
            chunks.push(current.join(";"));
            current.clear();
        }
        current.extend_from_slice(group);
        i = end;
    }
    if !current.is_empty() {
        chunks.push(current.join(";"));
    }
    chunks
}

/// Number of fields the SGR code at the head of `fields` consumes.
fn extended_len(fields: &[&str]) -> usize {
    let code = |i: usize| fields.get(i).map(|f| f.trim_start_matches('0'));
    match (code(0), code(1)) {
        (Some("38" | "48"), Some("5")) => 3,
        (Some("38" | "48"), Some("2")) => 5,
        _ => 1,
    }
}
