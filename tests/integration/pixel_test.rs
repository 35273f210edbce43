//! Half-block pixel editing on parsed art.

use bbs_ansi_art::pixel::{LOWER_HALF, UPPER_HALF};
use bbs_ansi_art::{
    AnsiDocument, AnsiParser, Canvas, Color, HalfBlockCanvas, Pixel, PixelCanvas, PixelError,
    PixelSurface,
};

const RED: Pixel = Pixel::rgb(170, 0, 0);
const BLUE: Pixel = Pixel::rgb(0, 0, 170);
const BLACK: Pixel = Pixel::rgb(0, 0, 0);

#[test]
fn parsed_half_blocks_read_as_pixels() {
    // Upper half red on blue, lower half red on blue
    let mut canvas = AnsiParser::parse(b"\x1b[31;44m\xdf\xdc", 4);
    let view = HalfBlockCanvas::new(&mut canvas);

    assert_eq!(view.pixel_height(), 2);
    assert_eq!(view.get_pixel(0, 0).unwrap(), RED);
    assert_eq!(view.get_pixel(0, 1).unwrap(), BLUE);
    assert_eq!(view.get_pixel(1, 0).unwrap(), BLUE);
    assert_eq!(view.get_pixel(1, 1).unwrap(), RED);
}

#[test]
fn painting_rewrites_the_cell_glyph() {
    let mut canvas = Canvas::new(3);
    let mut view = HalfBlockCanvas::new(&mut canvas);
    view.set_pixel(0, 0, RED).unwrap();
    view.set_pixel(1, 0, RED).unwrap();
    view.set_pixel(1, 1, RED).unwrap();

    let cell = view.canvas().get(0, 0).unwrap();
    assert_eq!(cell.ch, UPPER_HALF);
    assert_eq!(cell.fg, Color::Indexed(31));
    assert_eq!(cell.bg, Color::DEFAULT_BG);
    assert_eq!(view.canvas().get(1, 0).unwrap().ch, '█');
}

#[test]
fn painting_below_the_last_row_grows_the_canvas() {
    let mut canvas = Canvas::new(2);
    let mut view = HalfBlockCanvas::new(&mut canvas);
    view.set_pixel(0, 5, BLUE).unwrap();
    assert_eq!(view.pixel_height(), 6);
    assert_eq!(view.get_pixel(0, 5).unwrap(), BLUE);
    assert_eq!(view.get_pixel(0, 4).unwrap(), BLACK);
}

#[test]
fn out_of_range_column_is_an_error() {
    let mut canvas = Canvas::new(2);
    let mut view = HalfBlockCanvas::new(&mut canvas);
    assert!(matches!(
        view.set_pixel(2, 0, RED),
        Err(PixelError::Canvas(_))
    ));
}

#[test]
fn line_endpoints_are_painted() {
    let mut canvas = Canvas::new(4);
    let mut view = HalfBlockCanvas::new(&mut canvas);
    view.draw_line((0, 0), (3, 1), RED);
    assert_eq!(view.get_pixel(0, 0).unwrap(), RED);
    assert_eq!(view.get_pixel(3, 1).unwrap(), RED);
}

#[test]
fn true_color_grid_bounds() {
    let mut pixels = PixelCanvas::new(2, 2);
    let err = pixels.set_pixel(2, 1, RED).unwrap_err();
    assert_eq!(err.to_string(), "pixel (2, 1) out of bounds (2x2)");
    assert!(pixels.get_pixel(1, 2).is_err());
}

#[test]
fn classic_art_converts_to_pixel_native_text() {
    let canvas = AnsiParser::parse(b"\x1b[31;44m\xdf", 2);
    let pixels = PixelCanvas::from_canvas(&canvas);
    assert_eq!(pixels.get_pixel(0, 0).unwrap(), RED);
    assert_eq!(pixels.get_pixel(0, 1).unwrap(), BLUE);

    let text = pixels.render();
    insta::assert_snapshot!(text.escape_debug().to_string(), @r"\u{1b}[38;2;170;0;0m\u{1b}[48;2;0;0;170m▀\u{1b}[38;2;0;0;0m\u{1b}[48;2;0;0;0m▀\u{1b}[0m\n");
    assert_eq!(PixelCanvas::parse(&text), pixels);
}

#[test]
fn transparent_pixels_use_default_background() {
    let mut pixels = PixelCanvas::new(3, 2);
    pixels.fill(Pixel::transparent());
    pixels.set_pixel(1, 1, RED).unwrap();
    pixels.set_pixel(2, 0, BLUE).unwrap();

    let text = pixels.render();
    let line = text.trim_end_matches('\n');
    assert!(line.contains(LOWER_HALF));
    assert!(line.contains(UPPER_HALF));
    assert_eq!(PixelCanvas::parse(&text), pixels);
}

#[test]
fn art_document_keeps_its_text() {
    let mut pixels = PixelCanvas::new(2, 2);
    pixels.fill_rect(0, 0, 1, 2, RED);
    let text = pixels.render();

    let doc = AnsiDocument::from_art_text(&text);
    assert_eq!(doc.to_art(), text);
    assert_eq!(doc.render(), text.trim_end_matches('\n'));
    assert_eq!(doc.canvas.width(), 2);
}
