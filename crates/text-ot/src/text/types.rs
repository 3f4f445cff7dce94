//! Components of the flat text type.

use text_ot_util::strings::{char_inject, char_len};

use crate::component::Component;

/// One step of a flat text op. Positions count chars and are interpreted
/// against the document as left by the previous components of the same op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextComponent {
    /// Insert `text` before char `pos`. `undo` marks edits produced by undo.
    Insert { text: String, pos: usize, undo: bool },
    /// Delete `text`, which must be found at `pos`.
    Delete { text: String, pos: usize, undo: bool },
    /// Annotate `text` at `pos` without changing the document. `thread`
    /// identifies the comment thread and is carried through transforms.
    Comment {
        text: String,
        pos: usize,
        thread: Option<String>,
    },
}

/// A flat text operation.
pub type TextOp = Vec<TextComponent>;

impl TextComponent {
    pub fn insert(pos: usize, text: impl Into<String>) -> Self {
        TextComponent::Insert { text: text.into(), pos, undo: false }
    }

    pub fn delete(pos: usize, text: impl Into<String>) -> Self {
        TextComponent::Delete { text: text.into(), pos, undo: false }
    }

    pub fn comment(pos: usize, text: impl Into<String>) -> Self {
        TextComponent::Comment { text: text.into(), pos, thread: None }
    }

    /// Mark an insert or delete as produced by undo. Comments are returned
    /// unchanged.
    pub fn with_undo(mut self) -> Self {
        match &mut self {
            TextComponent::Insert { undo, .. } | TextComponent::Delete { undo, .. } => *undo = true,
            TextComponent::Comment { .. } => {}
        }
        self
    }

    /// Attach a thread id to a comment. Inserts and deletes are returned
    /// unchanged.
    pub fn with_thread(mut self, id: impl Into<String>) -> Self {
        if let TextComponent::Comment { thread, .. } = &mut self {
            *thread = Some(id.into());
        }
        self
    }

    pub fn pos(&self) -> usize {
        match self {
            TextComponent::Insert { pos, .. }
            | TextComponent::Delete { pos, .. }
            | TextComponent::Comment { pos, .. } => *pos,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            TextComponent::Insert { text, .. }
            | TextComponent::Delete { text, .. }
            | TextComponent::Comment { text, .. } => text,
        }
    }

    /// Length of the payload in chars.
    pub fn len(&self) -> usize {
        char_len(self.text())
    }

    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }

    /// The same component moved to `pos`.
    pub fn at(mut self, new_pos: usize) -> Self {
        match &mut self {
            TextComponent::Insert { pos, .. }
            | TextComponent::Delete { pos, .. }
            | TextComponent::Comment { pos, .. } => *pos = new_pos,
        }
        self
    }

    /// The same component carrying `new_text`.
    pub fn with_text(mut self, new_text: impl Into<String>) -> Self {
        match &mut self {
            TextComponent::Insert { text, .. }
            | TextComponent::Delete { text, .. }
            | TextComponent::Comment { text, .. } => *text = new_text.into(),
        }
        self
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, TextComponent::Comment { .. })
    }
}

impl Component for TextComponent {
    fn is_noop(&self) -> bool {
        match self {
            TextComponent::Insert { text, .. } | TextComponent::Delete { text, .. } => text.is_empty(),
            // An empty comment still anchors its thread.
            TextComponent::Comment { .. } => false,
        }
    }

    fn merge(&mut self, next: Self) -> Option<Self> {
        match (self, &next) {
            (
                TextComponent::Insert { text: last_text, pos: last_pos, undo: last_undo },
                TextComponent::Insert { text, pos, undo },
            ) if *last_undo == *undo
                && *last_pos <= *pos
                && *pos <= *last_pos + char_len(last_text) =>
            {
                let merged = char_inject(last_text, pos - *last_pos, text);
                *last_text = merged;
                return None;
            }
            (
                TextComponent::Delete { text: last_text, pos: last_pos, undo: last_undo },
                TextComponent::Delete { text, pos, undo },
            ) if *last_undo == *undo
                && *pos <= *last_pos
                && *last_pos <= *pos + char_len(text) =>
            {
                let merged = char_inject(text, *last_pos - pos, last_text);
                *last_text = merged;
                *last_pos = *pos;
                return None;
            }
            _ => {}
        }
        Some(next)
    }
}
