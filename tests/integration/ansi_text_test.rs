//! Escape-aware string surgery on rendered output.

use bbs_ansi_art::ansi_text::{
    insert_at_visible, slice_by_visible, strip_escapes, truncate, truncate_and_pad, visible_len,
};
use bbs_ansi_art::{AnsiParser, Render, TerminalRenderer};

fn rendered_line() -> String {
    let canvas = AnsiParser::parse(b"\x1b[1;31mRED\x1b[0;44mblue\x1b[0mplain", 40);
    TerminalRenderer::for_file().render(&canvas)
}

#[test]
fn measures_rendered_output() {
    let line = rendered_line();
    assert_eq!(visible_len(&line), 12);
    assert_eq!(strip_escapes(&line), "REDblueplain");
}

#[test]
fn truncated_render_keeps_colors_and_resets() {
    let line = rendered_line();
    let cut = truncate(&line, 5, true);
    assert_eq!(strip_escapes(&cut), "REDbl");
    assert!(cut.ends_with("\x1b[0m"));
}

#[test]
fn slice_of_render_replays_active_colors() {
    let line = rendered_line();
    let middle = slice_by_visible(&line, 4, 6);
    assert_eq!(strip_escapes(&middle), "lu");
    assert!(middle.ends_with("44mlu"));
}

#[test]
fn overlay_then_pad_to_a_column() {
    let line = insert_at_visible(&rendered_line(), 3, "|");
    assert_eq!(strip_escapes(&line), "RED|blueplain");

    let padded = truncate_and_pad(&line, 20);
    assert_eq!(visible_len(&padded), 20);
    assert!(padded.ends_with("       "));
}
