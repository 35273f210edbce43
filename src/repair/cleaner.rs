//! Escape-sequence cleaner.
//!
//! Removes sequences that misbehave on modern terminals while leaving
//! every other byte alone:
//! - window manipulation (`ESC[...t`), which resizes or moves the window
//! - private mode toggles (`ESC[?...h` / `ESC[?...l`)
//!
//! Works on raw CP437 bytes. Anything from the first `0x1A` on (the EOF
//! marker and SAUCE block) is set aside and reattached untouched.

use serde::Serialize;

use crate::parser::EOF_MARKER;

const ESC: u8 = 0x1B;
const RESET: &[u8] = b"\x1b[0m";

/// Which optional passes to run after stripping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanOptions {
    /// Collapse resets that follow another reset with only whitespace between.
    pub optimize: bool,
    /// Make sure the art ends with a reset.
    pub ensure_reset: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            optimize: true,
            ensure_reset: true,
        }
    }
}

/// Per-category counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CleanDetails {
    pub window_manipulation: usize,
    pub mode_changes: usize,
    pub redundant_resets: usize,
    pub reset_added: bool,
}

/// Outcome of cleaning one buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CleanResult {
    pub original_size: usize,
    pub cleaned_size: usize,
    pub sequences_removed: usize,
    pub details: CleanDetails,
}

impl CleanResult {
    pub fn was_modified(&self) -> bool {
        self.sequences_removed > 0 || self.details.reset_added
    }
}

/// Clean with the default options.
pub fn clean_bytes(data: &[u8]) -> (Vec<u8>, CleanResult) {
    clean_with(data, &CleanOptions::default())
}

/// Clean `data`. Never fails; bytes it does not recognize pass through.
pub fn clean_with(data: &[u8], options: &CleanOptions) -> (Vec<u8>, CleanResult) {
    let split = data
        .iter()
        .position(|&b| b == EOF_MARKER)
        .unwrap_or(data.len());
    let (content, trailer) = data.split_at(split);

    let mut details = CleanDetails::default();

    // Removing a sequence can join its neighbours into a new one
    let mut cleaned = content.to_vec();
    loop {
        let mut scanner = Scanner::default();
        let pass = scanner.strip(&cleaned);
        details.window_manipulation += scanner.window_manipulation;
        details.mode_changes += scanner.mode_changes;
        cleaned = pass;
        if scanner.window_manipulation + scanner.mode_changes == 0 {
            break;
        }
    }

    if options.optimize {
        let (collapsed, count) = collapse_resets(&cleaned);
        cleaned = collapsed;
        details.redundant_resets = count;
    }

    if options.ensure_reset {
        details.reset_added = append_reset(&mut cleaned);
    }

    cleaned.extend_from_slice(trailer);

    let sequences_removed =
        details.window_manipulation + details.mode_changes + details.redundant_resets;
    if sequences_removed > 0 || details.reset_added {
        tracing::debug!(
            window_manipulation = details.window_manipulation,
            mode_changes = details.mode_changes,
            redundant_resets = details.redundant_resets,
            reset_added = details.reset_added,
            "cleaned escape sequences"
        );
    }

    let result = CleanResult {
        original_size: data.len(),
        cleaned_size: cleaned.len(),
        sequences_removed,
        details,
    };
    (cleaned, result)
}

// ============================================================================
// Strip pass
// ============================================================================

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    #[default]
    Normal,
    Escape, // Saw ESC
    Csi,    // Saw ESC [
    Params, // In CSI parameters
}

/// Single pass over the bytes, dropping the two removable CSI classes.
#[derive(Debug, Default)]
struct Scanner {
    state: ScanState,
    /// Offset of the ESC opening the current sequence
    start: usize,
    private: bool,
    window_manipulation: usize,
    mode_changes: usize,
}

impl Scanner {
    fn strip(&mut self, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(data.len());
        let mut i = 0;
        while i < data.len() {
            let byte = data[i];
            match (self.state, byte) {
                (ScanState::Normal, ESC) => {
                    self.state = ScanState::Escape;
                    self.start = i;
                }
                (ScanState::Normal, _) => out.push(byte),
                (ScanState::Escape, b'[') => {
                    self.state = ScanState::Csi;
                    self.private = false;
                }
                (ScanState::Escape, _) => {
                    // Not CSI: keep the ESC and rescan this byte
                    out.push(ESC);
                    self.state = ScanState::Normal;
                    continue;
                }
                (ScanState::Csi, b'?') => {
                    self.private = true;
                    self.state = ScanState::Params;
                }
                (ScanState::Csi, _) => {
                    self.state = ScanState::Params;
                    continue;
                }
                (ScanState::Params, b'0'..=b'9' | b';') => {}
                (ScanState::Params, command) => {
                    match (command, self.private) {
                        (b't', _) => self.window_manipulation += 1,
                        (b'h' | b'l', true) => self.mode_changes += 1,
                        _ => out.extend_from_slice(&data[self.start..=i]),
                    }
                    self.state = ScanState::Normal;
                }
            }
            i += 1;
        }

        // Unterminated sequence at the end is kept as-is
        if self.state != ScanState::Normal {
            out.extend_from_slice(&data[self.start..]);
            self.state = ScanState::Normal;
        }
        out
    }
}

// ============================================================================
// Optional passes
// ============================================================================

/// Drop resets that repeat a reset with only whitespace in between.
fn collapse_resets(data: &[u8]) -> (Vec<u8>, usize) {
    let mut out = Vec::with_capacity(data.len());
    let mut after_reset = false;
    let mut collapsed = 0;
    let mut i = 0;
    while i < data.len() {
        if data[i..].starts_with(RESET) {
            if after_reset {
                collapsed += 1;
            } else {
                out.extend_from_slice(RESET);
                after_reset = true;
            }
            i += RESET.len();
            continue;
        }
        let byte = data[i];
        if !byte.is_ascii_whitespace() {
            after_reset = false;
        }
        out.push(byte);
        i += 1;
    }
    (out, collapsed)
}

/// Insert a reset before trailing whitespace unless the content already
/// ends with one. Blank content is left alone.
fn append_reset(data: &mut Vec<u8>) -> bool {
    let end = data
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(0, |pos| pos + 1);
    if end == 0 || data[..end].ends_with(RESET) {
        return false;
    }
    data.splice(end..end, RESET.iter().copied());
    true
}
