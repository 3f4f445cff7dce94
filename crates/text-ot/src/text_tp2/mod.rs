//! The tombstone-stream `text-tp2` OT type.
//!
//! Deleted text is never removed from a tp2 document. It turns into a run of
//! tombstones that still occupies stream positions, so every op walks the
//! full history of the document from start to end:
//!
//! ```
//! use serde_json::json;
//! use text_ot::text_tp2::{apply, doc, Tp2Component::*};
//!
//! let d = doc::deserialize(&json!(["Hello world"])).unwrap();
//! let out = apply(&d, &[Skip(5), Delete(6)]).unwrap();
//! assert_eq!(doc::serialize(&out), json!(["Hello", 6]));
//! assert_eq!(out.text(), "Hello");
//! ```
//!
//! Because positions never disappear, tp2 transform has an exact inverse,
//! [`prune`].

pub mod types;
pub mod doc;
pub mod take;
pub mod apply;
pub mod transform;
pub mod compose;
pub mod codec;

use serde_json::Value;

pub use types::{Tp2Component, Tp2Op};
pub use doc::{DocCursor, DocPart, Tp2Doc};
pub use take::OpCursor;
pub use apply::apply;
pub use transform::{prune, transform};
pub use compose::compose;
pub use codec::{from_json, to_json};

use crate::error::Result;
use crate::ot_type::{OtType, Side};

/// Marker type implementing [`OtType`] for tp2 text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextTp2;

impl TextTp2 {
    /// Inverse of [`OtType::transform`].
    pub fn prune(op: &Tp2Op, other: &Tp2Op) -> Result<Tp2Op> {
        transform::prune(op, other)
    }
}

impl OtType for TextTp2 {
    type Snapshot = Tp2Doc;
    type Op = Tp2Op;

    const NAME: &'static str = "text-tp2";

    fn create() -> Tp2Doc {
        Tp2Doc::new()
    }

    fn apply(snapshot: &Tp2Doc, op: &Tp2Op) -> Result<Tp2Doc> {
        apply::apply(snapshot, op)
    }

    fn transform(op: &Tp2Op, other: &Tp2Op, side: Side) -> Result<Tp2Op> {
        transform::transform(op, other, side)
    }

    fn compose(op1: &Tp2Op, op2: &Tp2Op) -> Result<Tp2Op> {
        compose::compose(op1, op2)
    }

    fn normalize(op: Tp2Op) -> Tp2Op {
        crate::component::normalize(op)
    }

    fn serialize(snapshot: &Tp2Doc) -> Value {
        doc::serialize(snapshot)
    }

    fn deserialize(data: &Value) -> Result<Tp2Doc> {
        doc::deserialize(data)
    }
}
