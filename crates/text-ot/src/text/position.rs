//! Moving a single position through a component or an op.

use text_ot_util::strings::char_len;

use super::types::TextComponent;
use crate::ot_type::Side;

/// Transform `pos` by one component.
///
/// For an insert exactly at `pos`, `insert_after` decides whether `pos` is
/// pushed after the inserted text (`true`) or stays before it (`false`).
/// A position inside a deleted span collapses to the start of the span.
pub fn transform_position(pos: usize, c: &TextComponent, insert_after: bool) -> usize {
    match c {
        TextComponent::Insert { text, pos: at, .. } => {
            if *at < pos || (*at == pos && insert_after) {
                pos + char_len(text)
            } else {
                pos
            }
        }
        TextComponent::Delete { text, pos: at, .. } => {
            let len = char_len(text);
            if pos <= *at {
                pos
            } else if pos <= *at + len {
                *at
            } else {
                pos - len
            }
        }
        TextComponent::Comment { .. } => pos,
    }
}

/// Transform a cursor position by a whole op.
///
/// With `Side::Right` the cursor is pushed after inserts landing exactly on
/// it; with `Side::Left` it stays in front of them.
pub fn transform_cursor(position: usize, op: &[TextComponent], side: Side) -> usize {
    let insert_after = side == Side::Right;
    op.iter()
        .fold(position, |pos, c| transform_position(pos, c, insert_after))
}
