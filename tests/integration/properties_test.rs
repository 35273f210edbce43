//! Property tests over arbitrary input.

use proptest::prelude::*;

use bbs_ansi_art::ansi_text::{truncate, truncate_and_pad, visible_len};
use bbs_ansi_art::canvas::color::nearest_palette_index;
use bbs_ansi_art::repair::clean_bytes;
use bbs_ansi_art::{AnsiParser, Canvas, HalfBlockCanvas, Pixel, PixelSurface, Render, TerminalRenderer};

/// Strings mixing text, SGR sequences and stray escapes.
fn ansi_string() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        "[a-zA-Z ▀▄█]{1,6}",
        (0u8..110).prop_map(|n| format!("\x1b[{}m", n)),
        (0u8..=255, 0u8..=255, 0u8..=255).prop_map(|(r, g, b)| format!("\x1b[38;2;{};{};{}m", r, g, b)),
        Just("\x1b[0m".to_string()),
        Just("\x1b".to_string()),
        Just("\x1b[12".to_string()),
    ];
    prop::collection::vec(piece, 0..12).prop_map(|pieces| pieces.concat())
}

/// Byte soup weighted towards escape sequences.
fn art_bytes() -> impl Strategy<Value = Vec<u8>> {
    let piece = prop_oneof![
        prop::collection::vec(any::<u8>(), 1..8),
        Just(b"\x1b[0m".to_vec()),
        Just(b"\x1b[8;25;80t".to_vec()),
        Just(b"\x1b[?25l".to_vec()),
        Just(b"\x1b[?7h".to_vec()),
        Just(b"\x1b[".to_vec()),
        Just(b"\x1b]".to_vec()),
        Just(b"\x1bP".to_vec()),
        Just(b" \r\n".to_vec()),
    ];
    prop::collection::vec(piece, 0..16).prop_map(|pieces| pieces.concat())
}

proptest! {
    #[test]
    fn truncate_never_exceeds_width(s in ansi_string(), w in 0usize..20, reset in any::<bool>()) {
        prop_assert!(visible_len(&truncate(&s, w, reset)) <= w);
    }

    #[test]
    fn truncate_and_pad_is_exact(s in ansi_string(), w in 0usize..20) {
        prop_assert_eq!(visible_len(&truncate_and_pad(&s, w)), w);
    }

    #[test]
    fn cleaning_is_idempotent(data in art_bytes()) {
        let (once, _) = clean_bytes(&data);
        let (twice, result) = clean_bytes(&once);
        prop_assert_eq!(&once, &twice);
        prop_assert!(!result.was_modified());
    }

    #[test]
    fn parser_accepts_any_bytes(data in prop::collection::vec(any::<u8>(), 0..512), width in 1usize..100) {
        let canvas = AnsiParser::parse(&data, width);
        prop_assert_eq!(canvas.width(), width);
        prop_assert!(canvas.rows().all(|row| row.len() == width));
        let _ = TerminalRenderer::default().render(&canvas);
    }

    #[test]
    fn split_feed_matches_single_feed(data in art_bytes(), at in 0usize..256, width in 1usize..40) {
        let at = at.min(data.len());
        let whole = AnsiParser::parse(&data, width);
        let mut parser = AnsiParser::new(width);
        parser.feed(&data[..at]);
        parser.feed(&data[at..]);
        prop_assert_eq!(parser.into_canvas(), whole);
    }

    #[test]
    fn pixel_packing_keeps_quantized_colors(
        top in (any::<u8>(), any::<u8>(), any::<u8>()),
        bottom in (any::<u8>(), any::<u8>(), any::<u8>()),
    ) {
        let top = Pixel::rgb(top.0, top.1, top.2);
        let bottom = Pixel::rgb(bottom.0, bottom.1, bottom.2);

        let mut canvas = Canvas::new(1);
        let mut view = HalfBlockCanvas::new(&mut canvas);
        view.set_pixel(0, 0, top).unwrap();
        view.set_pixel(0, 1, bottom).unwrap();

        let read_top = view.get_pixel(0, 0).unwrap();
        let read_bottom = view.get_pixel(0, 1).unwrap();
        prop_assert_eq!(nearest_palette_index(read_top.color()), nearest_palette_index(top.color()));
        prop_assert_eq!(nearest_palette_index(read_bottom.color()), nearest_palette_index(bottom.color()));
    }
}
