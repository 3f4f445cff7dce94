//! text-ot - operational transformation for collaborative plain-text editing.
//!
//! Two OT types live here:
//!
//! - [`text`]: the flat type. A snapshot is a string, ops are lists of
//!   position-addressed inserts, deletes and comments.
//! - [`text_tp2`]: the tombstone-stream type. Deleted text stays behind as
//!   tombstones, ops walk the whole stream, and transform has an exact
//!   inverse ([`text_tp2::prune`]).
//!
//! Both implement [`OtType`], so generic sync code can be written once.

pub mod error;
pub mod component;
pub mod ot_type;

pub mod text;
pub mod text_tp2;

pub use error::{OtError, Result};
pub use ot_type::{OtType, Side};
pub use text::Text;
pub use text_tp2::TextTp2;
