//! Transform for the flat text type.
//!
//! [`transform_component`] rewrites one component against one concurrent
//! component. [`transform_x`] lifts it to whole ops (N×M work, recursing
//! when a component splits in two), and [`transform`] picks the half of the
//! result the caller asked for.

use text_ot_util::strings::{char_inject, char_len, char_slice, char_tail};

use super::position::transform_position;
use super::types::{TextComponent, TextOp};
use crate::component::append;
use crate::error::{OtError, Result};
use crate::ot_type::Side;

/// Transform component `c` by the concurrent component `other`, appending the
/// result (zero, one or two components) to `dest`.
///
/// `side` only matters when two inserts land on the same position.
pub fn transform_component(
    dest: &mut TextOp,
    c: &TextComponent,
    other: &TextComponent,
    side: Side,
) -> Result<()> {
    match c {
        TextComponent::Insert { pos, .. } => {
            let pos = transform_position(*pos, other, side == Side::Right);
            append(dest, c.clone().at(pos));
        }
        TextComponent::Delete { text, pos, .. } => match other {
            TextComponent::Insert { text: other_text, pos: other_pos, .. } => {
                // An insert strictly inside the deleted span splits the
                // delete around the inserted text.
                let mut rest: &str = text;
                if *pos < *other_pos {
                    let before = other_pos - pos;
                    append(dest, c.clone().with_text(char_slice(text, 0, before)));
                    rest = char_tail(text, before);
                }
                if !rest.is_empty() {
                    let shifted = pos + char_len(other_text);
                    append(dest, c.clone().with_text(rest).at(shifted));
                }
            }
            TextComponent::Delete { text: other_text, pos: other_pos, .. } => {
                transform_span(dest, c, text, *pos, other, other_text, *other_pos)?;
            }
            TextComponent::Comment { .. } => append(dest, c.clone()),
        },
        TextComponent::Comment { text, pos, .. } => match other {
            TextComponent::Insert { text: other_text, pos: other_pos, .. } => {
                let len = char_len(text);
                if *pos < *other_pos && *other_pos < pos + len {
                    // Inserts strictly inside the comment become part of it.
                    // Inserts on either edge do not.
                    let grown = char_inject(text, other_pos - pos, other_text);
                    append(dest, c.clone().with_text(grown));
                } else {
                    append(dest, c.clone().at(transform_position(*pos, other, true)));
                }
            }
            TextComponent::Delete { text: other_text, pos: other_pos, .. } => {
                transform_span(dest, c, text, *pos, other, other_text, *other_pos)?;
            }
            TextComponent::Comment { .. } => append(dest, c.clone()),
        },
    }
    Ok(())
}

/// Delete-or-comment `c` (covering `text` at `pos`) against a concurrent
/// delete of `other_text` at `other_pos`. Keeps only the chars of `c` that
/// survive the other delete.
fn transform_span(
    dest: &mut TextOp,
    c: &TextComponent,
    text: &str,
    pos: usize,
    other: &TextComponent,
    other_text: &str,
    other_pos: usize,
) -> Result<()> {
    let len = char_len(text);
    let other_len = char_len(other_text);

    if pos >= other_pos + other_len {
        append(dest, c.clone().at(pos - other_len));
        return Ok(());
    }
    if pos + len <= other_pos {
        append(dest, c.clone());
        return Ok(());
    }

    // They overlap somewhere.
    let mut surviving = String::new();
    if pos < other_pos {
        surviving.push_str(char_slice(text, 0, other_pos - pos));
    }
    if pos + len > other_pos + other_len {
        surviving.push_str(char_tail(text, other_pos + other_len - pos));
    }

    // Both ops must agree on the text in the overlap.
    let start = pos.max(other_pos);
    let end = (pos + len).min(other_pos + other_len);
    let ours = char_slice(text, start - pos, end - pos);
    let theirs = char_slice(other_text, start - other_pos, end - other_pos);
    if ours != theirs {
        tracing::debug!(start, ours, theirs, "concurrent ops disagree on overlapping text");
        return Err(OtError::ApplyMismatch {
            expected: ours.to_string(),
            found: theirs.to_string(),
            pos: start,
        });
    }

    let shrunk = c.clone().with_text(surviving).at(transform_position(pos, other, false));
    // A fully deleted delete disappears through append; a fully deleted
    // comment stays as an empty anchor.
    append(dest, shrunk);
    Ok(())
}

/// Transform two concurrent ops against each other.
///
/// Returns `(left', right')` where `left'` applies after `right` and
/// `right'` applies after `left`. `left` wins insert ties.
pub fn transform_x(left: &[TextComponent], right: &[TextComponent]) -> Result<(TextOp, TextOp)> {
    let mut left_op: TextOp = left.to_vec();
    let mut new_right: TextOp = Vec::new();

    for right_component in right {
        let mut pending = Some(right_component.clone());
        let mut new_left: TextOp = Vec::new();

        let mut k = 0;
        while k < left_op.len() {
            let Some(current) = pending.take() else { break };
            let mut next: TextOp = Vec::new();
            transform_component(&mut new_left, &left_op[k], &current, Side::Left)?;
            transform_component(&mut next, &current, &left_op[k], Side::Right)?;
            k += 1;

            match next.len() {
                1 => pending = next.pop(),
                0 => {
                    for l in &left_op[k..] {
                        append(&mut new_left, l.clone());
                    }
                    break;
                }
                _ => {
                    // The right component split in two: transform the rest of
                    // left against both halves.
                    let (l, r) = transform_x(&left_op[k..], &next)?;
                    for c in l {
                        append(&mut new_left, c);
                    }
                    for c in r {
                        append(&mut new_right, c);
                    }
                    break;
                }
            }
        }

        if let Some(c) = pending {
            append(&mut new_right, c);
        }
        left_op = new_left;
    }

    Ok((left_op, new_right))
}

/// Transform `op` so that it applies after the concurrent `other`.
pub fn transform(op: &[TextComponent], other: &[TextComponent], side: Side) -> Result<TextOp> {
    tracing::trace!(op_len = op.len(), other_len = other.len(), %side, "transform text op");
    if other.is_empty() {
        return Ok(op.to_vec());
    }
    if op.len() == 1 && other.len() == 1 {
        let mut dest = Vec::new();
        transform_component(&mut dest, &op[0], &other[0], side)?;
        return Ok(dest);
    }
    match side {
        Side::Left => Ok(transform_x(op, other)?.0),
        Side::Right => Ok(transform_x(other, op)?.1),
    }
}
