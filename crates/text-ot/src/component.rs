//! Op-construction helpers shared by both text types.
//!
//! Each type's component enum implements [`Component`]; [`append`] and
//! [`check_op`] are written once against the trait.

use crate::error::Result;

pub trait Component: Clone + Sized {
    /// `true` for components that have no effect and must never be stored
    /// (empty inserts, zero-length skips).
    fn is_noop(&self) -> bool;

    /// Fold `next` into `self` when the pair can be expressed as a single
    /// component. Hands `next` back unchanged when it cannot.
    fn merge(&mut self, next: Self) -> Option<Self>;

    /// Validate a whole op. Types whose components are valid by
    /// construction keep the default.
    fn check_op(_op: &[Self]) -> Result<()> {
        Ok(())
    }
}

/// Append `component` to `op`, merging with the last component where
/// possible and dropping no-ops.
///
/// A merged component is appended again, since its new extent may reach the
/// component before it. No adjacent pair in the result can merge.
pub fn append<C: Component>(op: &mut Vec<C>, component: C) {
    if component.is_noop() {
        return;
    }
    let Some(mut last) = op.pop() else {
        op.push(component);
        return;
    };
    match last.merge(component) {
        Some(rest) => {
            op.push(last);
            op.push(rest);
        }
        None => append(op, last),
    }
}

/// Validate `op` with its component type's rules.
pub fn check_op<C: Component>(op: &[C]) -> Result<()> {
    C::check_op(op)
}

/// Rebuild `op` through [`append`]. Idempotent.
pub fn normalize<C: Component>(op: impl IntoIterator<Item = C>) -> Vec<C> {
    let mut result = Vec::new();
    for component in op {
        append(&mut result, component);
    }
    result
}
