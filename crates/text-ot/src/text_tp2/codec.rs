//! JSON codec for tp2 ops.
//!
//! Wire shapes: a bare number is a skip, `{"i": "text"}` inserts text,
//! `{"i": 3}` inserts tombstones and `{"d": 3}` deletes.

use serde_json::{json, Value};

use super::types::{Tp2Component, Tp2Op};
use crate::component::check_op;
use crate::error::{OtError, Result};

fn malformed(msg: impl Into<String>) -> OtError {
    OtError::MalformedOperation(msg.into())
}

pub fn component_to_json(c: &Tp2Component) -> Value {
    match c {
        Tp2Component::Skip(n) => json!(n),
        Tp2Component::Insert(s) => json!({ "i": s }),
        Tp2Component::InsertTombs(n) => json!({ "i": n }),
        Tp2Component::Delete(n) => json!({ "d": n }),
    }
}

pub fn to_json(op: &[Tp2Component]) -> Value {
    Value::Array(op.iter().map(component_to_json).collect())
}

fn count(v: &Value, what: &str) -> Result<usize> {
    v.as_u64()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| malformed(format!("{what} must be a non-negative integer")))
}

pub fn component_from_json(v: &Value) -> Result<Tp2Component> {
    if v.is_number() {
        return Ok(Tp2Component::Skip(count(v, "skip")?));
    }
    let map = v
        .as_object()
        .ok_or_else(|| malformed("component must be a number or an object"))?;
    if map.len() != 1 {
        return Err(malformed("component object must have exactly one key"));
    }
    if let Some(i) = map.get("i") {
        return match i {
            Value::String(s) => Ok(Tp2Component::Insert(s.clone())),
            other => Ok(Tp2Component::InsertTombs(count(other, "tombstone insert")?)),
        };
    }
    if let Some(d) = map.get("d") {
        return Ok(Tp2Component::Delete(count(d, "delete")?));
    }
    Err(malformed("component must be a skip, an insert or a delete"))
}

/// Decode and validate an op.
pub fn from_json(v: &Value) -> Result<Tp2Op> {
    let items = v
        .as_array()
        .ok_or_else(|| malformed("op must be an array"))?;
    let op = items
        .iter()
        .map(component_from_json)
        .collect::<Result<Tp2Op>>()?;
    check_op(&op)?;
    Ok(op)
}
