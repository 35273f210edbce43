//! Character set codecs.
//!
//! Classic BBS artwork is stored as CP437 bytes. Everything inside the crate
//! works on Unicode `char`s; this module converts at the boundary.

pub mod cp437;

pub use cp437::{decode, decode_byte, encode, encode_char, is_glyph};
