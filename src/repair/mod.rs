//! Byte-level repair of ANSI art files.

pub mod cleaner;

pub use cleaner::{clean_bytes, clean_with, CleanDetails, CleanOptions, CleanResult};
