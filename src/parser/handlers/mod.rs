//! Per-family handlers for the sequences the parser understands.
//!
//! `cursor` moves and saves the cursor, `editing` erases, and `style`
//! applies SGR parameters to the pen.

pub mod cursor;
pub mod editing;
pub mod style;

use tracing::trace;

pub fn trace_ignored_csi(action: char, params: &[u16], intermediates: &[u8]) {
    trace!(%action, ?params, ?intermediates, "ignoring CSI sequence");
}

pub fn trace_ignored_esc(byte: u8, intermediates: &[u8]) {
    trace!(
        byte = %char::from(byte).escape_default(),
        ?intermediates,
        "ignoring ESC sequence"
    );
}
