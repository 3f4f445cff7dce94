//! Error type shared by both text OT types.

use thiserror::Error;

/// Everything that can go wrong while applying, transforming, composing or
/// pruning a text operation.
///
/// None of these are recoverable inside the library: an op that fails is
/// never partially applied, and the caller decides whether to resync the
/// client or drop the op.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OtError {
    /// A component has the wrong shape, or the op as a whole breaks the
    /// component rules (adjacent skips, empty payloads, unknown side).
    #[error("malformed operation: {0}")]
    MalformedOperation(String),

    /// A tp2 snapshot whose cached lengths disagree with its data, or whose
    /// data is not a coalesced run list.
    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(String),

    /// The text an op expects at `pos` is not what is there. The op was
    /// computed against a different document version.
    #[error("expected '{expected}' at position {pos}, found '{found}'")]
    ApplyMismatch {
        expected: String,
        found: String,
        pos: usize,
    },

    /// A document cursor was advanced past the last run.
    #[error("operation goes past the end of the document")]
    EndOfDocument,

    /// An op references more content than the document (or the op it is
    /// composed with) contains.
    #[error("operation overruns the document: {0}")]
    OpOverrun(String),

    /// Prune would have to remove characters that only exist because of the
    /// op being pruned against.
    #[error("the op deletes locally inserted characters; it cannot be pruned")]
    UnprunableDelete,

    /// One operand was consumed while the other still had non-insert
    /// components left.
    #[error("operations have incompatible lengths: {0}")]
    IncompatibleOperationLength(String),

    /// The operation exists but this function cannot handle it.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

pub type Result<T> = std::result::Result<T, OtError>;
