//! Cursor movement and positioning tests.

use bbs_ansi_art::{AnsiParser, Canvas};

fn parse(data: &[u8], width: usize) -> Canvas {
    AnsiParser::parse(data, width)
}

fn text(canvas: &Canvas) -> String {
    let mut lines: Vec<String> = canvas
        .plain_lines()
        .into_iter()
        .map(|l| l.trim_end().to_string())
        .collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

#[test]
fn cursor_up_moves_to_previous_row() {
    let canvas = parse(b"Line 1\r\nLine 2\x1b[AX", 80);
    assert_eq!(text(&canvas), "Line 1X\nLine 2");
}

#[test]
fn cursor_up_stops_at_top() {
    let canvas = parse(b"ab\x1b[5AX", 80);
    assert_eq!(text(&canvas), "abX");
}

#[test]
fn cursor_down_expands_canvas() {
    let mut parser = AnsiParser::new(10);
    parser.feed(b"A\x1b[3BX");
    assert_eq!(parser.cursor(), (2, 3));
    assert_eq!(parser.canvas().height(), 4);
    assert_eq!(text(parser.canvas()), "A\n\n\n X");
}

#[test]
fn cursor_forward_default_and_zero_param_move_one() {
    assert_eq!(text(&parse(b"A\x1b[CB", 80)), "A B");
    assert_eq!(text(&parse(b"A\x1b[0CB", 80)), "A B");
    assert_eq!(text(&parse(b"A\x1b[3CB", 80)), "A   B");
}

#[test]
fn cursor_forward_clamps_to_right_margin() {
    let mut parser = AnsiParser::new(10);
    parser.feed(b"\x1b[50C");
    // parked on the margin: the next print wraps
    assert_eq!(parser.cursor(), (0, 1));
    parser.feed(b"X");
    assert_eq!(text(parser.canvas()), "\nX");
}

#[test]
fn cursor_forward_at_margin_wraps_then_moves() {
    let canvas = parse(b"0123456789\x1b[2CX", 10);
    assert_eq!(text(&canvas), "0123456789\n  X");
}

#[test]
fn cursor_back_stops_at_column_zero() {
    assert_eq!(text(&parse(b"ABCD\x1b[2DX", 80)), "ABXD");
    assert_eq!(text(&parse(b"AB\x1b[9DX", 80)), "XB");
}

#[test]
fn cursor_position_is_one_indexed() {
    assert_eq!(text(&parse(b"Hello\x1b[1;3HX", 80)), "HeXlo");
    assert_eq!(text(&parse(b"Hello\x1b[1;3fX", 80)), "HeXlo");
    assert_eq!(text(&parse(b"Hello\x1b[HX", 80)), "Xello");
}

#[test]
fn cursor_position_expands_rows_and_clamps_column() {
    let mut parser = AnsiParser::new(10);
    parser.feed(b"\x1b[5;99H");
    assert_eq!(parser.cursor(), (9, 4));
    assert_eq!(parser.canvas().height(), 5);
}

#[test]
fn cursor_position_zero_params_mean_origin() {
    assert_eq!(text(&parse(b"abc\x1b[0;0HX", 80)), "Xbc");
}

#[test]
fn save_and_restore_cursor() {
    let canvas = parse(b"ab\x1b[s\r\nline two\x1b[uX", 80);
    assert_eq!(text(&canvas), "abX\nline two");
}

#[test]
fn dec_save_and_restore_cursor() {
    let canvas = parse(b"ab\x1b7\r\nline two\x1b8X", 80);
    assert_eq!(text(&canvas), "abX\nline two");
}

#[test]
fn restore_without_save_goes_home() {
    assert_eq!(text(&parse(b"abc\x1b[uX", 80)), "Xbc");
}

#[test]
fn window_manipulation_and_modes_are_ignored() {
    let canvas = parse(b"\x1b[0;0;0t\x1b[?7h\x1b[?25lHi\x1b[4h\x1b[4l", 80);
    assert_eq!(text(&canvas), "Hi");
}

#[test]
fn unknown_sequences_are_skipped() {
    let canvas = parse(b"a\x1b[5Zb\x1b[2;3rc\x1bMd", 80);
    assert_eq!(text(&canvas), "abcd");
}
