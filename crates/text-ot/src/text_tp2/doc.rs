//! tp2 document snapshots and the primitives for walking them.
//!
//! A document is a list of runs: live text, or a count of tombstones
//! (deleted chars whose positions are kept). `'Hello .....world'`, with `.`
//! a tombstone, is stored as `["Hello ", 5, "world"]`.

use serde_json::Value;
use text_ot_util::strings::{char_len, char_slice, char_tail};

use crate::error::{OtError, Result};

/// One run of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocPart {
    Text(String),
    Tombs(usize),
}

impl DocPart {
    /// Stream positions covered by the run.
    pub fn len(&self) -> usize {
        match self {
            DocPart::Text(s) => char_len(s),
            DocPart::Tombs(n) => *n,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            DocPart::Text(s) => s.is_empty(),
            DocPart::Tombs(n) => *n == 0,
        }
    }
}

/// A tp2 snapshot.
///
/// `data` is always coalesced: no empty runs, and no two neighbouring runs of
/// the same kind. `char_length` counts live chars, `total_length` counts live
/// chars plus tombstones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tp2Doc {
    pub char_length: usize,
    pub total_length: usize,
    pub data: Vec<DocPart>,
}

impl Tp2Doc {
    /// An empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// A document holding `text` and no tombstones.
    pub fn from_text(text: &str) -> Self {
        let mut doc = Self::new();
        append_doc(&mut doc, DocPart::Text(text.to_string()));
        doc
    }

    /// The live text, tombstones skipped.
    pub fn text(&self) -> String {
        self.data
            .iter()
            .filter_map(|part| match part {
                DocPart::Text(s) => Some(s.as_str()),
                DocPart::Tombs(_) => None,
            })
            .collect()
    }

    /// Check that the cached lengths match the data and that the data is
    /// coalesced.
    pub fn validate(&self) -> Result<()> {
        let mut chars = 0;
        let mut total = 0;
        let mut last_was_text: Option<bool> = None;
        for part in &self.data {
            if part.is_empty() {
                return Err(OtError::MalformedSnapshot("snapshot contains an empty run".into()));
            }
            let is_text = matches!(part, DocPart::Text(_));
            if last_was_text == Some(is_text) {
                return Err(OtError::MalformedSnapshot(
                    "adjacent runs of the same kind must be coalesced".into(),
                ));
            }
            last_was_text = Some(is_text);
            let len = part.len();
            if is_text {
                chars += len;
            }
            total += len;
        }
        if chars != self.char_length || total != self.total_length {
            tracing::debug!(
                chars,
                total,
                char_length = self.char_length,
                total_length = self.total_length,
                "snapshot lengths disagree with data"
            );
            return Err(OtError::MalformedSnapshot(format!(
                "cached lengths ({}, {}) do not match data ({chars}, {total})",
                self.char_length, self.total_length
            )));
        }
        Ok(())
    }
}

/// Position inside a document's `data`: run index plus offset into the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocCursor {
    pub index: usize,
    pub offset: usize,
}

/// Take the next part of `doc` at `cursor`, advancing the cursor.
///
/// At most `max_length` positions are taken (`None` takes the rest of the
/// current run). A text run is cut at `max_length`. A tombstone run is cut
/// too, unless `tombs_indivisible` is set, in which case the rest of the run
/// is returned whole whatever `max_length` says.
pub fn take_doc(
    doc: &Tp2Doc,
    cursor: &mut DocCursor,
    max_length: Option<usize>,
    tombs_indivisible: bool,
) -> Result<DocPart> {
    let part = doc.data.get(cursor.index).ok_or(OtError::EndOfDocument)?;

    let result = match part {
        DocPart::Text(s) => DocPart::Text(
            match max_length {
                Some(max) => char_slice(s, cursor.offset, cursor.offset + max),
                None => char_tail(s, cursor.offset),
            }
            .to_string(),
        ),
        DocPart::Tombs(n) => {
            let remaining = n - cursor.offset;
            match max_length {
                Some(max) if !tombs_indivisible => DocPart::Tombs(max.min(remaining)),
                _ => DocPart::Tombs(remaining),
            }
        }
    };

    let taken = result.len();
    if part.len() - cursor.offset > taken {
        cursor.offset += taken;
    } else {
        cursor.index += 1;
        cursor.offset = 0;
    }
    Ok(result)
}

/// Append a part to the end of `doc`, coalescing with the last run and
/// keeping the cached lengths current. Empty parts are ignored.
pub fn append_doc(doc: &mut Tp2Doc, part: DocPart) {
    if part.is_empty() {
        return;
    }
    let len = part.len();
    if matches!(part, DocPart::Text(_)) {
        doc.char_length += len;
    }
    doc.total_length += len;

    match (doc.data.last_mut(), &part) {
        (Some(DocPart::Text(last)), DocPart::Text(s)) => { last.push_str(s); return; }
        (Some(DocPart::Tombs(last)), DocPart::Tombs(n)) => { *last += n; return; }
        _ => {}
    }
    doc.data.push(part);
}

/// The wire form of a snapshot: its `data` array.
pub fn serialize(doc: &Tp2Doc) -> Value {
    Value::Array(
        doc.data
            .iter()
            .map(|part| match part {
                DocPart::Text(s) => Value::String(s.clone()),
                DocPart::Tombs(n) => Value::from(*n),
            })
            .collect(),
    )
}

/// Rebuild a snapshot from its `data` array, recomputing both lengths.
pub fn deserialize(data: &Value) -> Result<Tp2Doc> {
    let arr = data
        .as_array()
        .ok_or_else(|| OtError::MalformedSnapshot("snapshot data must be an array".into()))?;
    let mut doc = Tp2Doc::new();
    for entry in arr {
        let part = match entry {
            Value::String(s) => DocPart::Text(s.clone()),
            Value::Number(n) => DocPart::Tombs(
                n.as_u64()
                    .and_then(|n| usize::try_from(n).ok())
                    .ok_or_else(|| OtError::MalformedSnapshot(format!("invalid tombstone count {n}")))?,
            ),
            other => {
                return Err(OtError::MalformedSnapshot(format!(
                    "snapshot entries must be strings or numbers, got {other}"
                )))
            }
        };
        append_doc(&mut doc, part);
    }
    Ok(doc)
}
