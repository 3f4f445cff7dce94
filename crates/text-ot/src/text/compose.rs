//! Compose, compress and normalize for the flat text type.
//!
//! Flat ops need no positional walk to compose: components already apply in
//! sequence, so composing is concatenation through append-merge.

use super::types::{TextComponent, TextOp};
use crate::component::{append, normalize as append_all};

/// A single op equivalent to applying `op1` and then `op2`.
///
/// Every component of `op1`, then of `op2`, goes through append-merge.
pub fn compose(op1: &[TextComponent], op2: &[TextComponent]) -> TextOp {
    tracing::trace!(op1_len = op1.len(), op2_len = op2.len(), "compose text ops");
    let mut result = append_all(op1.iter().cloned());
    for c in op2 {
        append(&mut result, c.clone());
    }
    result
}

/// Compress an op's components together as much as append-merge allows.
/// Order is preserved; an insert and a later delete of the same text are not
/// cancelled against each other.
pub fn compress(op: &[TextComponent]) -> TextOp {
    compose(&[], op)
}

/// Drop empty inserts/deletes and merge adjacent compatible components.
pub fn normalize(op: TextOp) -> TextOp {
    append_all(op)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::apply::apply;

    #[test]
    fn compose_merges_typing() {
        let op1 = vec![TextComponent::insert(0, "he")];
        let op2 = vec![TextComponent::insert(2, "llo")];
        assert_eq!(compose(&op1, &op2), vec![TextComponent::insert(0, "hello")]);
    }

    #[test]
    fn compose_keeps_unrelated_components() {
        let op1 = vec![TextComponent::insert(0, "a")];
        let op2 = vec![TextComponent::delete(3, "x")];
        assert_eq!(compose(&op1, &op2).len(), 2);
    }

    #[test]
    fn compose_applies_like_sequence() {
        let s = "hello world";
        let op1 = vec![TextComponent::delete(0, "hello"), TextComponent::insert(0, "bye")];
        let op2 = vec![TextComponent::insert(3, ","), TextComponent::comment(5, "world")];
        let composed = compose(&op1, &op2);
        let sequential = apply(&apply(s, &op1).unwrap(), &op2).unwrap();
        assert_eq!(apply(s, &composed).unwrap(), sequential);
        assert_eq!(sequential, "bye, world");
    }

    #[test]
    fn compose_drops_empty_components() {
        let op2 = vec![TextComponent::insert(0, ""), TextComponent::delete(0, "")];
        assert!(compose(&[], &op2).is_empty());
    }

    #[test]
    fn compress_merges_adjacent() {
        let op = vec![
            TextComponent::insert(0, "a"),
            TextComponent::insert(1, "b"),
            TextComponent::delete(5, "y"),
            TextComponent::delete(4, "x"),
        ];
        assert_eq!(
            compress(&op),
            vec![TextComponent::insert(0, "ab"), TextComponent::delete(4, "xy")]
        );
    }

    #[test]
    fn compose_merges_within_op1() {
        let op1 = vec![
            TextComponent::insert(0, ""),
            TextComponent::insert(0, "a"),
            TextComponent::insert(1, "b"),
        ];
        assert_eq!(compose(&op1, &[]), vec![TextComponent::insert(0, "ab")]);
    }

    #[test]
    fn normalize_cascades_delete_merges() {
        // "xa" lands at 1 and then reaches the "dé" delete at 3.
        let op = vec![
            TextComponent::delete(3, "dé"),
            TextComponent::delete(1, "x"),
            TextComponent::delete(1, "a"),
        ];
        let once = normalize(op.clone());
        assert_eq!(once, vec![TextComponent::delete(1, "xadé")]);
        assert_eq!(normalize(once.clone()), once);
        assert_eq!(apply("?xadé!", &once).unwrap(), apply("?xadé!", &op).unwrap());
    }

    #[test]
    fn normalize_is_idempotent() {
        let op = vec![
            TextComponent::insert(2, "a"),
            TextComponent::insert(2, ""),
            TextComponent::insert(3, "b"),
            TextComponent::comment(0, "q"),
        ];
        let once = normalize(op);
        assert_eq!(normalize(once.clone()), once);
        assert_eq!(once.len(), 2);
    }
}
