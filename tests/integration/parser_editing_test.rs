//! Erase in display / erase in line tests.

use bbs_ansi_art::{AnsiParser, Canvas, Color};

fn parse(data: &[u8], width: usize) -> Canvas {
    AnsiParser::parse(data, width)
}

fn lines(canvas: &Canvas) -> Vec<String> {
    canvas
        .plain_lines()
        .into_iter()
        .map(|l| l.trim_end().to_string())
        .collect()
}

#[test]
fn erase_line_to_end() {
    let canvas = parse(b"Hello World\x1b[6D\x1b[K", 20);
    assert_eq!(lines(&canvas), vec!["Hello"]);
}

#[test]
fn erase_line_from_start_is_inclusive() {
    let canvas = parse(b"Hello World\x1b[1;5H\x1b[1K", 20);
    assert_eq!(lines(&canvas), vec!["      World"]);
}

#[test]
fn erase_whole_line() {
    let canvas = parse(b"one\r\ntwo\r\nthree\x1b[2A\x1b[2K", 20);
    assert_eq!(lines(&canvas), vec!["", "two", "three"]);
}

#[test]
fn erased_cells_lose_attributes() {
    let canvas = parse(b"\x1b[44mabc\x1b[1;1H\x1b[K", 10);
    assert!(canvas.rows().next().unwrap().iter().all(|c| c.is_default()));
}

#[test]
fn erase_display_to_end() {
    let canvas = parse(b"one\r\ntwo\r\nthree\x1b[2;2H\x1b[J", 20);
    assert_eq!(lines(&canvas), vec!["one", "t", ""]);
}

#[test]
fn erase_display_from_start() {
    let canvas = parse(b"one\r\ntwo\r\nthree\x1b[2;2H\x1b[1J", 20);
    assert_eq!(lines(&canvas), vec!["", "  o", "three"]);
}

#[test]
fn erase_display_all_replaces_canvas_and_homes_cursor() {
    let mut parser = AnsiParser::new(20);
    parser.feed(b"one\r\ntwo\r\nthree\x1b[2J");
    assert_eq!(parser.cursor(), (0, 0));
    assert_eq!(parser.canvas().height(), 1);
    parser.feed(b"X");
    assert_eq!(lines(parser.canvas()), vec!["X"]);
}

#[test]
fn erase_display_keeps_current_attributes_for_new_text() {
    let canvas = parse(b"\x1b[31mab\x1b[2Jc", 10);
    assert_eq!(canvas.get(0, 0).unwrap().fg, Color::Indexed(31));
}

#[test]
fn erase_at_pending_wrap_is_clamped() {
    let canvas = parse(b"0123456789\x1b[1K", 10);
    assert_eq!(lines(&canvas)[0], "");
    let canvas = parse(b"0123456789\x1b[K", 10);
    assert_eq!(lines(&canvas)[0], "0123456789");
}
