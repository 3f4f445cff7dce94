//! The flat `text` OT type.
//!
//! A snapshot is a plain string. An op is a list of components, each
//! inserting, deleting or commenting on text at a char position:
//!
//! ```
//! use text_ot::text::{apply, TextComponent};
//!
//! let op = vec![TextComponent::insert(5, " world"), TextComponent::delete(0, "h")];
//! assert_eq!(apply("hello", &op).unwrap(), "ello world");
//! ```
//!
//! Components apply in sequence, so `[{i:"abc", p:0}]` is the same op as
//! `[{i:"a", p:0}, {i:"b", p:1}, {i:"c", p:2}]`.

pub mod types;
pub mod position;
pub mod apply;
pub mod compose;
pub mod invert;
pub mod transform;
pub mod codec;

use serde_json::Value;

pub use types::{TextComponent, TextOp};
pub use position::{transform_cursor, transform_position};
pub use apply::apply;
pub use compose::{compose, compress, normalize};
pub use invert::invert;
pub use transform::{transform, transform_component, transform_x};
pub use codec::{from_json, to_json};

use crate::error::{OtError, Result};
use crate::ot_type::{OtType, Side};

/// Marker type implementing [`OtType`] for flat text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Text;

impl OtType for Text {
    type Snapshot = String;
    type Op = TextOp;

    const NAME: &'static str = "text";

    fn create() -> String {
        String::new()
    }

    fn apply(snapshot: &String, op: &TextOp) -> Result<String> {
        apply::apply(snapshot, op)
    }

    fn transform(op: &TextOp, other: &TextOp, side: Side) -> Result<TextOp> {
        transform::transform(op, other, side)
    }

    fn compose(op1: &TextOp, op2: &TextOp) -> Result<TextOp> {
        Ok(compose::compose(op1, op2))
    }

    fn normalize(op: TextOp) -> TextOp {
        compose::normalize(op)
    }

    /// The wire form of a flat snapshot is the string itself.
    fn serialize(snapshot: &String) -> Value {
        Value::String(snapshot.clone())
    }

    fn deserialize(data: &Value) -> Result<String> {
        data.as_str()
            .map(str::to_string)
            .ok_or_else(|| OtError::MalformedSnapshot("text snapshot must be a string".into()))
    }
}
