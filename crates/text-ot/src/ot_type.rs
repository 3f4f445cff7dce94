//! The functional contract both text types expose to a sync layer.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::{OtError, Result};

/// Which of two concurrent ops wins a tie.
///
/// Exactly one side of every transform pair is `Left`; when both ops insert
/// at the same place, the left insert ends up first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    /// The other side.
    pub fn flip(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = OtError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            other => Err(OtError::MalformedOperation(format!(
                "side ({other}) should be 'left' or 'right'"
            ))),
        }
    }
}

/// An OT type: a snapshot representation plus the pure functions over it.
///
/// Implemented by [`crate::text::Text`] and [`crate::text_tp2::TextTp2`].
pub trait OtType {
    type Snapshot: Clone + PartialEq + fmt::Debug;
    type Op: Clone + PartialEq + fmt::Debug;

    /// Registered type name.
    const NAME: &'static str;

    /// An empty document.
    fn create() -> Self::Snapshot;

    fn apply(snapshot: &Self::Snapshot, op: &Self::Op) -> Result<Self::Snapshot>;

    /// Rewrite `op` so it applies after `other`.
    fn transform(op: &Self::Op, other: &Self::Op, side: Side) -> Result<Self::Op>;

    /// A single op equivalent to `op1` followed by `op2`.
    fn compose(op1: &Self::Op, op2: &Self::Op) -> Result<Self::Op>;

    /// Merge and clean `op` without changing its effect.
    fn normalize(op: Self::Op) -> Self::Op;

    fn serialize(snapshot: &Self::Snapshot) -> Value;

    fn deserialize(data: &Value) -> Result<Self::Snapshot>;
}
