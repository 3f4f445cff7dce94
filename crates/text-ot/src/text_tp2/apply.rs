//! Applying a tp2 op to a document.

use super::doc::{append_doc, take_doc, DocCursor, DocPart, Tp2Doc};
use super::types::Tp2Component;
use crate::component::check_op;
use crate::error::{OtError, Result};

/// Apply `op` to `doc`, building a fresh document. `doc` is not modified.
///
/// Deleted text turns into tombstones of the same length; deleting
/// tombstones leaves them as they are. The op must walk the whole document.
pub fn apply(doc: &Tp2Doc, op: &[Tp2Component]) -> Result<Tp2Doc> {
    doc.validate()?;
    check_op(op)?;

    let mut new_doc = Tp2Doc::new();
    let mut cursor = DocCursor::default();

    for component in op {
        match component {
            Tp2Component::Skip(n) => {
                let mut remainder = *n;
                while remainder > 0 {
                    let part = take(doc, &mut cursor, remainder)?;
                    remainder -= part.len();
                    append_doc(&mut new_doc, part);
                }
            }
            Tp2Component::Insert(s) => append_doc(&mut new_doc, DocPart::Text(s.clone())),
            Tp2Component::InsertTombs(n) => append_doc(&mut new_doc, DocPart::Tombs(*n)),
            Tp2Component::Delete(n) => {
                let mut remainder = *n;
                while remainder > 0 {
                    remainder -= take(doc, &mut cursor, remainder)?.len();
                }
                append_doc(&mut new_doc, DocPart::Tombs(*n));
            }
        }
    }

    if cursor.index < doc.data.len() {
        tracing::debug!(
            consumed = new_doc.total_length,
            total_length = doc.total_length,
            "op stops before the end of the document"
        );
        return Err(OtError::IncompatibleOperationLength(format!(
            "op ends at run {} of {}; it must span the whole document",
            cursor.index,
            doc.data.len()
        )));
    }
    Ok(new_doc)
}

fn take(doc: &Tp2Doc, cursor: &mut DocCursor, max_length: usize) -> Result<DocPart> {
    take_doc(doc, cursor, Some(max_length), false).map_err(|e| match e {
        OtError::EndOfDocument => {
            tracing::debug!(total_length = doc.total_length, "op runs past the end of the document");
            OtError::OpOverrun(format!(
                "op references more than the {} positions in the document",
                doc.total_length
            ))
        }
        other => other,
    })
}
