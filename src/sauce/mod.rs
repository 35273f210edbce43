//! SAUCE metadata records.
//!
//! SAUCE (Standard Architecture for Universal Comment Extensions) is the
//! 128-byte trailer BBS art carries after its `0x1A` EOF marker, with an
//! optional comment block in front of it.
//!
//! Reference: https://www.acid.org/info/sauce/sauce.htm
//!
//! # Layout
//!
//! ```text
//! <art bytes> 0x1A [COMNT <n x 64-byte lines>] SAUCE00 <121 bytes of fields>
//! ```
//!
//! - `record` - the record type and its enums
//! - `reader` - locating and decoding the trailer
//! - `writer` - encoding and appending the trailer

mod reader;
mod record;
mod writer;

pub use reader::{parse, split};
pub use record::{DataType, FileType, SauceRecord};
pub use writer::{append, to_bytes};

/// Record signature.
pub const SAUCE_ID: &[u8; 5] = b"SAUCE";
/// Comment block signature.
pub const COMNT_ID: &[u8; 5] = b"COMNT";
/// Size of the record proper.
pub const RECORD_SIZE: usize = 128;
/// Size of one comment line.
pub const COMMENT_LINE_SIZE: usize = 64;
