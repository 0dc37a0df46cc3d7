use std::fs;

use anyhow::{Context, Result};
use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// On-disk Jupyter notebook document.
///
/// Only `cells` is interpreted; every other top-level field rides along in
/// `extra` and round-trips untouched.
#[derive(Debug, Serialize, Deserialize)]
pub struct Notebook {
    #[serde(default)]
    pub cells: Vec<Cell>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One notebook cell. `source` holds ordered text lines, each usually
/// newline-terminated; metadata, outputs, and any other fields are preserved
/// verbatim in `extra`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Cell {
    pub cell_type: String,
    #[serde(default)]
    pub source: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Cell {
    /// Fresh, never-executed code cell in nbformat shape.
    pub fn code(source: Vec<String>) -> Self {
        let mut extra = Map::new();
        extra.insert("execution_count".to_owned(), Value::Null);
        extra.insert("metadata".to_owned(), Value::Object(Map::new()));
        extra.insert("outputs".to_owned(), Value::Array(Vec::new()));
        Self {
            cell_type: "code".to_owned(),
            source,
            extra,
        }
    }

    pub fn is_code(&self) -> bool {
        self.cell_type == "code"
    }
}

pub fn load(path: &Utf8Path) -> Result<Notebook> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path))
}

/// Serialize with human-readable formatting and rewrite the file in place.
pub fn save(notebook: &Notebook, path: &Utf8Path) -> Result<()> {
    let rendered =
        serde_json::to_string_pretty(notebook).with_context(|| format!("serializing {}", path))?;
    fs::write(path, rendered).with_context(|| format!("writing {}", path))
}
