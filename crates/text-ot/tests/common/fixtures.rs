use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

/// One `transform_component` case: transform `op` by `other` from `side`.
#[derive(Debug, Clone, Deserialize)]
pub struct TransformCase {
    pub name: String,
    pub op: Value,
    pub other: Value,
    #[serde(default = "default_side")]
    pub side: String,
    pub expected: Value,
}

/// One flat `apply` case. `expected` is `None` when apply must fail.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplyCase {
    pub name: String,
    pub snapshot: String,
    pub op: Value,
    #[serde(default)]
    pub expected: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextFixtures {
    pub transform: Vec<TransformCase>,
    pub apply: Vec<ApplyCase>,
}

fn default_side() -> String {
    "left".to_string()
}

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

pub fn load_text_fixtures() -> TextFixtures {
    let path = fixtures_dir().join("text_cases.json");
    let data = fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {:?}: {e}", path));
    serde_json::from_str(&data).unwrap_or_else(|e| panic!("failed to parse {:?}: {e}", path))
}
