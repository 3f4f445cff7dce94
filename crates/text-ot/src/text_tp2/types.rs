//! Components of the tombstone-stream text type.

use text_ot_util::strings::char_len;

use crate::component::Component;
use crate::error::{OtError, Result};

/// One step of a tp2 op. Ops walk the whole document stream, live chars and
/// tombstones alike, from start to end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tp2Component {
    /// Copy the next `n` positions (chars or tombstones) unchanged.
    Skip(usize),
    /// Insert live text.
    Insert(String),
    /// Insert `n` fresh tombstones.
    InsertTombs(usize),
    /// Turn the next `n` positions into tombstones.
    Delete(usize),
}

/// A tp2 operation.
pub type Tp2Op = Vec<Tp2Component>;

impl Tp2Component {
    /// Number of stream positions the component covers: consumed for skips
    /// and deletes, produced for inserts.
    pub fn len(&self) -> usize {
        match self {
            Tp2Component::Skip(n) | Tp2Component::InsertTombs(n) | Tp2Component::Delete(n) => *n,
            Tp2Component::Insert(s) => char_len(s),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` for both text and tombstone inserts.
    pub fn is_insert(&self) -> bool {
        matches!(self, Tp2Component::Insert(_) | Tp2Component::InsertTombs(_))
    }
}

impl Component for Tp2Component {
    fn is_noop(&self) -> bool {
        self.is_empty()
    }

    fn merge(&mut self, next: Self) -> Option<Self> {
        match (self, &next) {
            (Tp2Component::Skip(n), Tp2Component::Skip(m)) => { *n += m; return None; }
            (Tp2Component::InsertTombs(n), Tp2Component::InsertTombs(m)) => { *n += m; return None; }
            (Tp2Component::Delete(n), Tp2Component::Delete(m)) => { *n += m; return None; }
            (Tp2Component::Insert(s), Tp2Component::Insert(t)) => { s.push_str(t); return None; }
            _ => {}
        }
        Some(next)
    }

    fn check_op(op: &[Self]) -> Result<()> {
        let mut last_was_skip = false;
        for c in op {
            match c {
                Tp2Component::Skip(0) => {
                    return Err(OtError::MalformedOperation(
                        "skip components must be a positive number".into(),
                    ));
                }
                Tp2Component::Skip(_) if last_was_skip => {
                    return Err(OtError::MalformedOperation(
                        "adjacent skip components should be combined".into(),
                    ));
                }
                Tp2Component::Insert(s) if s.is_empty() => {
                    return Err(OtError::MalformedOperation(
                        "inserts must insert a string or a positive number".into(),
                    ));
                }
                Tp2Component::InsertTombs(0) => {
                    return Err(OtError::MalformedOperation(
                        "inserts must insert a string or a positive number".into(),
                    ));
                }
                Tp2Component::Delete(0) => {
                    return Err(OtError::MalformedOperation(
                        "deletes must be a positive number".into(),
                    ));
                }
                _ => {}
            }
            last_was_skip = matches!(c, Tp2Component::Skip(_));
        }
        Ok(())
    }
}
