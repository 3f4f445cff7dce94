//! String utilities.
//!
//! Document positions in text-ot count chars, not bytes. These helpers do the
//! char-to-byte conversion for slicing and splicing.

mod chars;

pub use chars::{byte_offset, char_inject, char_len, char_remove, char_slice, char_split, char_tail};
