//! Parse -> render -> parse round trips.

use bbs_ansi_art::{AnsiParser, Canvas, Cell, Color, Render, TerminalRenderer, TextRenderer};

const HI_BYE: &[u8] = b"\x1b[31mHi\x1b[0m\n\x1b[44mBye\x1b[0m";

/// Visible character plus effective (fg, bg, bold) of every cell.
fn appearance(canvas: &Canvas) -> Vec<(char, Color, Color, bool)> {
    canvas
        .cells()
        .map(|(_, _, c)| (c.ch, c.fg, c.bg, c.bold))
        .collect()
}

#[test]
fn hi_bye_grid() {
    let canvas = AnsiParser::parse(HI_BYE, 10);
    let red = |ch| Cell::with_colors(ch, Color::Indexed(31), Color::DEFAULT_BG);

    assert_eq!(canvas.get(0, 0).unwrap(), red('H'));
    assert_eq!(canvas.get(1, 0).unwrap(), red('i'));
    assert!(canvas.get(2, 0).unwrap().is_default());

    for (x, ch) in "Bye".chars().enumerate() {
        let cell = canvas.get(x, 1).unwrap();
        assert_eq!(cell.ch, ch);
        assert_eq!(cell.bg, Color::Indexed(44));
        assert_eq!(cell.fg, Color::DEFAULT_FG);
    }
    assert!(canvas.get(3, 1).unwrap().is_default());
}

#[test]
fn hi_bye_renders_minimal_sequences() {
    let canvas = AnsiParser::parse(HI_BYE, 10);
    let out = TerminalRenderer::default().render(&canvas);
    insta::assert_snapshot!(out.escape_debug().to_string(), @r"\u{1b}[31mHi\n\u{1b}[37;44mBye\u{1b}[0m");
}

#[test]
fn hi_bye_survives_a_round_trip() {
    let canvas = AnsiParser::parse(HI_BYE, 10);
    let rendered = TerminalRenderer::for_file().render(&canvas);
    let reparsed = AnsiParser::parse(rendered.as_bytes(), 10);
    assert_eq!(appearance(&canvas), appearance(&reparsed));
}

#[test]
fn block_art_survives_a_round_trip() {
    // CP437 blocks, cursor movement, bright colors and a full-width row
    let mut data = b"\x1b[1;33;44m\xdb\xdb\xb2\xb1\xb0\x1b[0m\x1b[5C\x1b[35m\xdc\xdf\r\n".to_vec();
    data.extend_from_slice(b"\x1b[92;100m");
    data.extend(std::iter::repeat(b'#').take(20));
    data.extend_from_slice(b"\x1b[0mend");

    let canvas = AnsiParser::parse(&data, 20);
    let rendered = TerminalRenderer::for_file().render(&canvas);
    let reparsed = AnsiParser::parse(rendered.as_bytes(), 20);
    assert_eq!(appearance(&canvas), appearance(&reparsed));
}

#[test]
fn true_color_survives_a_round_trip() {
    let canvas = AnsiParser::parse(b"\x1b[38;2;10;20;30;48;2;200;100;0mX\x1b[0m Y", 10);
    let rendered = TerminalRenderer::for_file().render(&canvas);
    let reparsed = AnsiParser::parse(rendered.as_bytes(), 10);
    assert_eq!(appearance(&canvas), appearance(&reparsed));
    assert_eq!(reparsed.get(0, 0).unwrap().fg, Color::rgb(10, 20, 30));
}

#[test]
fn text_renderer_drops_styling() {
    let canvas = AnsiParser::parse(HI_BYE, 10);
    insta::assert_snapshot!(TextRenderer::default().render(&canvas), @r"
    Hi
    Bye
    ");
}
