//! text-ot-util - helpers shared by the text-ot crates.
//!
//! - [`strings`]: char-indexed slicing and splicing.
//! - [`fuzzer`]: a seeded generator of random edit positions and text.

pub mod fuzzer;
pub mod strings;

// Re-exports for convenience
pub use fuzzer::{Fuzzer, EDIT_ALPHABET};
pub use strings::{byte_offset, char_inject, char_len, char_remove, char_slice, char_split, char_tail};
