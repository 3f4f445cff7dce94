//! Compose for the tp2 type.

use super::take::OpCursor;
use super::types::{Tp2Component, Tp2Op};
use crate::component::{append, check_op};
use crate::error::{OtError, Result};

/// Compose `op1` and `op2` into one op with the effect of applying `op1`
/// then `op2`.
///
/// `op2` is addressed against the stream `op1` produces. Text that `op1`
/// inserts and `op2` deletes becomes inserted tombstones.
pub fn compose(op1: &[Tp2Component], op2: &[Tp2Component]) -> Result<Tp2Op> {
    tracing::trace!(op1_len = op1.len(), op2_len = op2.len(), "compose tp2 ops");
    check_op(op1)?;
    check_op(op2)?;

    let mut result = Tp2Op::new();
    let mut cursor = OpCursor::new(op1);

    for component in op2 {
        match component {
            Tp2Component::Skip(n) => {
                let mut length = *n;
                while length > 0 {
                    let chunk = take_chunk(&mut cursor, length)?;
                    length -= chunk.len();
                    append(&mut result, chunk);
                }
            }
            Tp2Component::Insert(_) | Tp2Component::InsertTombs(_) => {
                append(&mut result, component.clone());
            }
            Tp2Component::Delete(n) => {
                let mut length = *n;
                while length > 0 {
                    let chunk = take_chunk(&mut cursor, length)?;
                    let chunk_length = chunk.len();
                    length -= chunk_length;
                    // Deleting op1's own insert leaves it behind as tombstones.
                    // Skipped and op1-deleted positions stay deletes.
                    let replacement = if chunk.is_insert() {
                        Tp2Component::InsertTombs(chunk_length)
                    } else {
                        Tp2Component::Delete(chunk_length)
                    };
                    append(&mut result, replacement);
                }
            }
        }
    }

    while let Some(chunk) = cursor.take(None, false) {
        if !chunk.is_insert() {
            return Err(OtError::IncompatibleOperationLength(format!(
                "op1 has a {:?} left over after op2 ended",
                chunk
            )));
        }
        append(&mut result, chunk);
    }

    Ok(result)
}

fn take_chunk(cursor: &mut OpCursor<'_>, length: usize) -> Result<Tp2Component> {
    cursor.take(Some(length), false).ok_or_else(|| {
        tracing::debug!(index = cursor.index(), "op2 runs past the end of op1's output");
        OtError::OpOverrun("op2 traverses more positions than op1 produces".into())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text_tp2::apply::apply;
    use crate::text_tp2::doc::{deserialize, serialize};
    use serde_json::json;
    use Tp2Component::*;

    #[test]
    fn insert_then_delete_leaves_tombstones() {
        let op1 = vec![Skip(3), Insert("XY".into())];
        let op2 = vec![Skip(3), Delete(2)];
        let composed = compose(&op1, &op2).unwrap();
        assert_eq!(composed, vec![Skip(3), InsertTombs(2)]);

        let doc = deserialize(&json!(["abc"])).unwrap();
        let out = apply(&doc, &composed).unwrap();
        assert_eq!(serialize(&out), json!(["abc", 2]));
        assert_eq!(out.text(), "abc");
    }

    #[test]
    fn skip_covers_op1_tombstones() {
        let op1 = vec![Delete(2), Skip(1)];
        let op2 = vec![Skip(2), Insert("z".into()), Skip(1)];
        assert_eq!(
            compose(&op1, &op2).unwrap(),
            vec![Delete(2), Insert("z".into()), Skip(1)]
        );
    }

    #[test]
    fn delete_over_skip_and_delete() {
        let op1 = vec![Skip(1), Delete(1), Skip(1)];
        let op2 = vec![Delete(3)];
        assert_eq!(compose(&op1, &op2).unwrap(), vec![Delete(3)]);
    }

    #[test]
    fn partial_insert_delete_splits_text() {
        let op1 = vec![Insert("abcd".into())];
        let op2 = vec![Skip(1), Delete(2), Skip(1)];
        assert_eq!(
            compose(&op1, &op2).unwrap(),
            vec![Insert("a".into()), InsertTombs(2), Insert("d".into())]
        );
    }

    #[test]
    fn matches_sequential_apply() {
        let doc = deserialize(&json!(["hello", 2, "world"])).unwrap();
        let op1 = vec![Skip(5), Insert(" ".into()), Delete(2), Skip(5)];
        let op2 = vec![Skip(3), Delete(3), Skip(2), Insert("!".into()), Skip(5)];
        let composed = compose(&op1, &op2).unwrap();
        let sequential = apply(&apply(&doc, &op1).unwrap(), &op2).unwrap();
        assert_eq!(apply(&doc, &composed).unwrap(), sequential);
    }

    #[test]
    fn trailing_op1_inserts_survive() {
        let op1 = vec![Skip(1), Insert("!".into())];
        let op2 = vec![Delete(1)];
        assert_eq!(compose(&op1, &op2).unwrap(), vec![Delete(1), Insert("!".into())]);
    }

    #[test]
    fn op2_overrun_fails() {
        assert!(matches!(
            compose(&[Skip(1)], &[Skip(2)]),
            Err(OtError::OpOverrun(_))
        ));
    }

    #[test]
    fn leftover_op1_fails() {
        assert!(matches!(
            compose(&[Skip(3)], &[Skip(2)]),
            Err(OtError::IncompatibleOperationLength(_))
        ));
    }
}
