//! Applying a flat text op to a string snapshot.

use text_ot_util::strings::{char_inject, char_len, char_remove, char_slice};

use super::types::TextComponent;
use crate::error::{OtError, Result};

/// Apply `op` to `snapshot`, returning the new document.
///
/// Deletes and comments must match the text at their position exactly;
/// otherwise the op was computed against another version of the document
/// and [`OtError::ApplyMismatch`] is returned.
pub fn apply(snapshot: &str, op: &[TextComponent]) -> Result<String> {
    let mut doc = snapshot.to_string();
    for component in op {
        match component {
            TextComponent::Insert { text, pos, .. } => {
                let len = char_len(&doc);
                if *pos > len {
                    tracing::debug!(pos, len, "insert past the end of the document");
                    return Err(OtError::OpOverrun(format!(
                        "insert at {pos} in a document of length {len}"
                    )));
                }
                doc = char_inject(&doc, *pos, text);
            }
            TextComponent::Delete { text, pos, .. } => {
                expect_text(&doc, text, *pos)?;
                doc = char_remove(&doc, *pos, char_len(text));
            }
            TextComponent::Comment { text, pos, .. } => {
                expect_text(&doc, text, *pos)?;
            }
        }
    }
    Ok(doc)
}

fn expect_text(doc: &str, expected: &str, pos: usize) -> Result<()> {
    let found = char_slice(doc, pos, pos + char_len(expected));
    if found != expected {
        tracing::debug!(pos, expected, found, "op text does not match document");
        return Err(OtError::ApplyMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
            pos,
        });
    }
    Ok(())
}
