//! Explicit cursor for pulling components off the front of a tp2 op.

use text_ot_util::strings::char_slice;

use super::types::Tp2Component;

/// Reads an op component by component, splitting components when asked for
/// less than a whole one.
#[derive(Debug, Clone)]
pub struct OpCursor<'a> {
    op: &'a [Tp2Component],
    /// Index of the next component to take from.
    index: usize,
    /// Positions of that component already taken.
    offset: usize,
}

impl<'a> OpCursor<'a> {
    pub fn new(op: &'a [Tp2Component]) -> Self {
        Self { op, index: 0, offset: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// `true` once every component has been taken.
    pub fn is_done(&self) -> bool {
        self.index >= self.op.len()
    }

    /// The component the next [`take`](Self::take) will read from, or `None`
    /// at the end. Returns the whole component even if part of it has
    /// already been taken; callers only look at its kind.
    pub fn peek(&self) -> Option<&'a Tp2Component> {
        self.op.get(self.index)
    }

    /// Take up to `max_length` positions (`None`: no limit) from the op.
    ///
    /// With `inserts_indivisible`, an insert (text or tombstones) is always
    /// returned whole, however long it is. Skips and deletes are always cut
    /// at `max_length`. Returns `None` once the op is fully consumed.
    pub fn take(&mut self, max_length: Option<usize>, inserts_indivisible: bool) -> Option<Tp2Component> {
        let component = self.op.get(self.index)?;
        let remaining = component.len() - self.offset;
        let indivisible = inserts_indivisible && component.is_insert();

        let start = self.offset;
        let taken = match max_length {
            Some(max) if remaining > max && !indivisible => {
                self.offset += max;
                max
            }
            _ => {
                self.index += 1;
                self.offset = 0;
                remaining
            }
        };

        Some(match component {
            Tp2Component::Skip(_) => Tp2Component::Skip(taken),
            Tp2Component::InsertTombs(_) => Tp2Component::InsertTombs(taken),
            Tp2Component::Delete(_) => Tp2Component::Delete(taken),
            Tp2Component::Insert(s) => Tp2Component::Insert(char_slice(s, start, start + taken).to_string()),
        })
    }
}
