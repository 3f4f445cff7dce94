//! Transform and prune for the tp2 type.
//!
//! Both walk `other` component by component while pulling matching spans off
//! `op`. Transform makes room for `other`'s inserts, prune takes that room
//! away again. Deletes in `other` leave tombstones, so they occupy the same
//! span as a skip.

use super::take::OpCursor;
use super::types::{Tp2Component, Tp2Op};
use crate::component::{append, check_op};
use crate::error::{OtError, Result};
use crate::ot_type::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    /// Transform: re-express `op` against the document with `other` applied.
    Forwards(Side),
    /// Prune: undo a forwards transform.
    Backwards,
}

/// Transform `op` so it applies after the concurrent `other`.
///
/// `side` breaks ties when both ops insert at the same position: the
/// [`Side::Left`] op's insert lands first.
pub fn transform(op: &[Tp2Component], other: &[Tp2Component], side: Side) -> Result<Tp2Op> {
    transformer(op, other, Direction::Forwards(side))
}

/// Inverse of [`transform`]: take an op expressed against the document with
/// `other` applied and re-express it against the document before `other`.
///
/// Fails with [`OtError::UnprunableDelete`] when `op` deletes text that only
/// exists because of `other`.
pub fn prune(op: &[Tp2Component], other: &[Tp2Component]) -> Result<Tp2Op> {
    transformer(op, other, Direction::Backwards)
}

fn transformer(op: &[Tp2Component], other: &[Tp2Component], direction: Direction) -> Result<Tp2Op> {
    tracing::trace!(op_len = op.len(), other_len = other.len(), ?direction, "transform tp2 op");
    check_op(op)?;
    check_op(other)?;

    let mut new_op = Tp2Op::new();
    let mut cursor = OpCursor::new(op);

    for component in other {
        let mut length = component.len();

        if component.is_insert() {
            match direction {
                Direction::Forwards(side) => {
                    if side == Side::Left {
                        while matches!(cursor.peek(), Some(c) if c.is_insert()) {
                            if let Some(chunk) = cursor.take(None, false) {
                                append(&mut new_op, chunk);
                            }
                        }
                    }
                    append(&mut new_op, Tp2Component::Skip(length));
                }
                Direction::Backwards => {
                    while length > 0 {
                        match take_chunk(&mut cursor, length, op)? {
                            Tp2Component::Delete(_) => {
                                tracing::debug!(
                                    index = cursor.index(),
                                    "op deletes text inserted by the op being pruned"
                                );
                                return Err(OtError::UnprunableDelete);
                            }
                            Tp2Component::Skip(n) => length -= n,
                            chunk => append(&mut new_op, chunk),
                        }
                    }
                }
            }
        } else {
            while length > 0 {
                let chunk = take_chunk(&mut cursor, length, op)?;
                if !chunk.is_insert() {
                    length -= chunk.len();
                }
                append(&mut new_op, chunk);
            }
        }
    }

    // Whatever is left of `op` may only be trailing inserts.
    while let Some(chunk) = cursor.take(None, false) {
        if !chunk.is_insert() {
            return Err(OtError::IncompatibleOperationLength(format!(
                "op has a {:?} left over after the other op ended",
                chunk
            )));
        }
        append(&mut new_op, chunk);
    }

    Ok(new_op)
}

fn take_chunk(cursor: &mut OpCursor<'_>, length: usize, op: &[Tp2Component]) -> Result<Tp2Component> {
    cursor.take(Some(length), true).ok_or_else(|| {
        let span: usize = op.iter().filter(|c| !c.is_insert()).map(Tp2Component::len).sum();
        OtError::IncompatibleOperationLength(format!(
            "op spans {} positions but the other op needs more",
            span
        ))
    })
}
