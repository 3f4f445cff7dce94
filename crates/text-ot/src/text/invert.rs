//! Inverting flat text ops.

use super::types::{TextComponent, TextOp};
use crate::error::{OtError, Result};

/// The op that undoes `op`: components reversed, inserts and deletes
/// swapped. Comments have no inverse and are rejected.
pub fn invert(op: &[TextComponent]) -> Result<TextOp> {
    op.iter().rev().map(invert_component).collect()
}

fn invert_component(c: &TextComponent) -> Result<TextComponent> {
    match c {
        TextComponent::Insert { text, pos, undo } => Ok(TextComponent::Delete {
            text: text.clone(),
            pos: *pos,
            undo: *undo,
        }),
        TextComponent::Delete { text, pos, undo } => Ok(TextComponent::Insert {
            text: text.clone(),
            pos: *pos,
            undo: *undo,
        }),
        TextComponent::Comment { pos, .. } => Err(OtError::UnsupportedOperation(format!(
            "cannot invert comment at {pos}"
        ))),
    }
}
