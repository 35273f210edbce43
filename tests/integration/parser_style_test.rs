//! SGR attribute tests.

use bbs_ansi_art::canvas::Rgb;
use bbs_ansi_art::{AnsiParser, Canvas, Cell, Color};

fn parse(data: &[u8]) -> Canvas {
    AnsiParser::parse(data, 80)
}

fn cell(canvas: &Canvas, x: usize, y: usize) -> Cell {
    canvas.get(x, y).unwrap()
}

#[test]
fn foreground_and_background_codes_are_stored_as_is() {
    let canvas = parse(b"\x1b[31;44mA\x1b[93;105mB");
    assert_eq!(cell(&canvas, 0, 0).fg, Color::Indexed(31));
    assert_eq!(cell(&canvas, 0, 0).bg, Color::Indexed(44));
    assert_eq!(cell(&canvas, 1, 0).fg, Color::Indexed(93));
    assert_eq!(cell(&canvas, 1, 0).bg, Color::Indexed(105));
    assert!(!cell(&canvas, 1, 0).bold);
}

#[test]
fn bold_and_blink_toggle() {
    let canvas = parse(b"\x1b[1;5mA\x1b[22mB\x1b[25mC");
    assert!(cell(&canvas, 0, 0).bold && cell(&canvas, 0, 0).blink);
    assert!(!cell(&canvas, 1, 0).bold && cell(&canvas, 1, 0).blink);
    assert!(!cell(&canvas, 2, 0).bold && !cell(&canvas, 2, 0).blink);
}

#[test]
fn default_color_codes() {
    let canvas = parse(b"\x1b[32;41m\x1b[39;49mA");
    assert_eq!(cell(&canvas, 0, 0), Cell::new('A'));
}

#[test]
fn reset_restores_defaults() {
    let mut parser = AnsiParser::new(80);
    parser.feed(b"\x1b[1;5;35;46m\x1b[38;2;1;2;3m\x1b[0m");
    let attrs = parser.attributes();
    assert_eq!(attrs.fg, Color::Indexed(37));
    assert_eq!(attrs.bg, Color::Indexed(40));
    assert!(!attrs.bold);
    assert!(!attrs.blink);
}

#[test]
fn empty_sgr_is_reset() {
    let canvas = parse(b"\x1b[31m\x1b[mA");
    assert_eq!(cell(&canvas, 0, 0).fg, Color::Indexed(37));
}

#[test]
fn true_color() {
    let canvas = parse(b"\x1b[38;2;255;128;0;48;2;10;20;30mA");
    assert_eq!(cell(&canvas, 0, 0).fg, Color::Rgb(Rgb::new(255, 128, 0)));
    assert_eq!(cell(&canvas, 0, 0).bg, Color::Rgb(Rgb::new(10, 20, 30)));
    assert!(cell(&canvas, 0, 0).is_true_color());
}

#[test]
fn indexed_code_replaces_true_color() {
    let canvas = parse(b"\x1b[38;2;1;2;3m\x1b[32mA");
    assert_eq!(cell(&canvas, 0, 0).fg, Color::Indexed(32));
}

#[test]
fn color_256_low_indices_map_to_sgr_codes() {
    let canvas = parse(b"\x1b[38;5;1;48;5;4mA\x1b[38;5;9;48;5;15mB");
    assert_eq!(cell(&canvas, 0, 0).fg, Color::Indexed(31));
    assert_eq!(cell(&canvas, 0, 0).bg, Color::Indexed(44));
    assert_eq!(cell(&canvas, 1, 0).fg, Color::Indexed(91));
    assert_eq!(cell(&canvas, 1, 0).bg, Color::Indexed(107));
}

#[test]
fn color_256_high_indices_expand_to_rgb() {
    let canvas = parse(b"\x1b[38;5;196;48;5;244mA");
    assert_eq!(cell(&canvas, 0, 0).fg, Color::rgb(255, 0, 0));
    assert_eq!(cell(&canvas, 0, 0).bg, Color::rgb(128, 128, 128));
}

#[test]
fn codes_after_extended_color_still_apply() {
    let canvas = parse(b"\x1b[38;5;196;1mA");
    assert!(cell(&canvas, 0, 0).bold);
}

#[test]
fn unknown_codes_are_skipped() {
    let canvas = parse(b"\x1b[3;4;7;53;31mA");
    assert_eq!(cell(&canvas, 0, 0).fg, Color::Indexed(31));
    assert!(!cell(&canvas, 0, 0).reverse);
}

#[test]
fn truncated_extended_color_is_ignored() {
    let canvas = parse(b"\x1b[33m\x1b[38;5mA");
    assert_eq!(cell(&canvas, 0, 0).fg, Color::Indexed(33));
}

#[test]
fn attributes_persist_across_lines() {
    let canvas = parse(b"\x1b[36mA\r\nB");
    assert_eq!(cell(&canvas, 0, 1).fg, Color::Indexed(36));
}

#[test]
fn colored_rows_separated_by_newline() {
    let mut parser = AnsiParser::new(10);
    parser.feed(b"\x1b[31mHi\x1b[0m\n\x1b[44mBye\x1b[0m");
    let canvas = parser.into_canvas();
    assert_eq!(cell(&canvas, 0, 0).ch, 'H');
    assert_eq!(cell(&canvas, 1, 0).fg, Color::Indexed(31));
    assert!(cell(&canvas, 2, 0).is_default());
    for (x, ch) in "Bye".chars().enumerate() {
        let c = cell(&canvas, x, 1);
        assert_eq!(c.ch, ch);
        assert_eq!(c.bg, Color::Indexed(44));
        assert_eq!(c.fg, Color::Indexed(37));
    }
    assert!(cell(&canvas, 3, 1).is_default());
}
