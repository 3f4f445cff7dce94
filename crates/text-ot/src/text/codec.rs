//! JSON codec for flat text ops.
//!
//! Wire shapes:
//! - insert: `{"i": "text", "p": 3}` (plus `"u": true` for undo edits)
//! - delete: `{"d": "text", "p": 3}` (plus `"u": true`)
//! - comment: `{"c": "text", "p": 3, "t": "thread-id"}`

use serde_json::{json, Map, Value};

use super::types::{TextComponent, TextOp};
use crate::error::{OtError, Result};

fn malformed(msg: impl Into<String>) -> OtError {
    OtError::MalformedOperation(msg.into())
}

// ── Serialization ─────────────────────────────────────────────────────────

/// Serialize one component.
pub fn component_to_json(c: &TextComponent) -> Value {
    let mut m = Map::new();
    match c {
        TextComponent::Insert { text, pos, undo } => {
            m.insert("i".into(), json!(text));
            m.insert("p".into(), json!(pos));
            if *undo {
                m.insert("u".into(), json!(true));
            }
        }
        TextComponent::Delete { text, pos, undo } => {
            m.insert("d".into(), json!(text));
            m.insert("p".into(), json!(pos));
            if *undo {
                m.insert("u".into(), json!(true));
            }
        }
        TextComponent::Comment { text, pos, thread } => {
            m.insert("c".into(), json!(text));
            m.insert("p".into(), json!(pos));
            if let Some(t) = thread {
                m.insert("t".into(), json!(t));
            }
        }
    }
    Value::Object(m)
}

/// Serialize an op as a JSON array of components.
pub fn to_json(op: &[TextComponent]) -> Value {
    Value::Array(op.iter().map(component_to_json).collect())
}

// ── Deserialization ───────────────────────────────────────────────────────

/// Decode one component object.
pub fn component_from_json(v: &Value) -> Result<TextComponent> {
    let map = v
        .as_object()
        .ok_or_else(|| malformed("component must be an object"))?;

    let pos = match map.get("p") {
        None => return Err(malformed("component missing position field")),
        Some(p) => p
            .as_u64()
            .ok_or_else(|| malformed("position must be a non-negative integer"))?
            as usize,
    };

    let present: Vec<&str> = ["i", "d", "c"]
        .into_iter()
        .filter(|k| map.contains_key(*k))
        .collect();
    let [kind] = present.as_slice() else {
        return Err(malformed("component needs exactly one of an i, d or c field"));
    };
    let text = map[*kind]
        .as_str()
        .ok_or_else(|| malformed(format!("field {kind} must be a string")))?
        .to_string();

    let undo = match map.get("u") {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(_) => return Err(malformed("undo flag must be a boolean")),
    };

    Ok(match *kind {
        "i" => TextComponent::Insert { text, pos, undo },
        "d" => TextComponent::Delete { text, pos, undo },
        _ => {
            let thread = match map.get("t") {
                None | Some(Value::Null) => None,
                Some(Value::String(t)) => Some(t.clone()),
                Some(_) => return Err(malformed("thread id must be a string")),
            };
            TextComponent::Comment { text, pos, thread }
        }
    })
}

/// Decode an op. A bare component object is accepted as a one-component op.
pub fn from_json(v: &Value) -> Result<TextOp> {
    match v {
        Value::Array(arr) => arr.iter().map(component_from_json).collect(),
        Value::Object(_) => Ok(vec![component_from_json(v)?]),
        _ => Err(malformed("op must be an array of components")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_all_shapes() {
        let op = vec![
            TextComponent::insert(3, "abc"),
            TextComponent::delete(1, "x").with_undo(),
            TextComponent::comment(0, "q").with_thread("t1"),
        ];
        assert_eq!(
            to_json(&op),
            json!([
                {"i": "abc", "p": 3},
                {"d": "x", "p": 1, "u": true},
                {"c": "q", "p": 0, "t": "t1"}
            ])
        );
    }

    #[test]
    fn decodes_what_it_encodes() {
        let op = vec![
            TextComponent::insert(3, "héllo"),
            TextComponent::comment(2, "").with_thread("t9"),
        ];
        assert_eq!(from_json(&to_json(&op)).unwrap(), op);
    }

    #[test]
    fn accepts_bare_component() {
        assert_eq!(
            from_json(&json!({"i": "a", "p": 0})).unwrap(),
            vec![TextComponent::insert(0, "a")]
        );
    }

    #[test]
    fn rejects_missing_position() {
        assert!(matches!(
            from_json(&json!([{"i": "a"}])),
            Err(OtError::MalformedOperation(_))
        ));
    }

    #[test]
    fn rejects_negative_position() {
        assert!(from_json(&json!([{"i": "a", "p": -1}])).is_err());
        assert!(from_json(&json!([{"i": "a", "p": 1.5}])).is_err());
    }

    #[test]
    fn rejects_ambiguous_component() {
        assert!(from_json(&json!([{"i": "a", "d": "b", "p": 0}])).is_err());
        assert!(from_json(&json!([{"p": 0}])).is_err());
        assert!(from_json(&json!([{"i": 5, "p": 0}])).is_err());
    }

    #[test]
    fn rejects_non_array() {
        assert!(from_json(&json!("abc")).is_err());
        assert!(from_json(&json!([1])).is_err());
    }
}
