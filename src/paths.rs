use std::fmt::Write as _;
use std::fs;

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};

/// Resolved filesystem layout for the project.
///
/// Every location is a fixed join below `base_dir`. The struct is built once
/// at startup and handed around by reference; nothing mutates it afterwards.
#[derive(Clone, Debug)]
pub struct ProjectPaths {
    pub base_dir: Utf8PathBuf,
    pub data_dir: Utf8PathBuf,
    pub train_csv: Utf8PathBuf,
    pub test_csv: Utf8PathBuf,
    pub output_dir: Utf8PathBuf,
    pub models_dir: Utf8PathBuf,
}

impl ProjectPaths {
    /// Resolve the layout under `base` and guarantee the output directories
    /// exist. Creation is recursive and idempotent; failures are fatal.
    pub fn init(base: &Utf8Path) -> Result<Self> {
        let paths = Self::resolve(base);
        for dir in [&paths.output_dir, &paths.models_dir] {
            fs::create_dir_all(dir).with_context(|| format!("creating directory {}", dir))?;
        }
        Ok(paths)
    }

    fn resolve(base: &Utf8Path) -> Self {
        let data_dir = base.join("data");
        let output_dir = base.join("outputs");
        Self {
            train_csv: data_dir.join("train").join("train.csv"),
            test_csv: data_dir.join("test").join("test.csv"),
            models_dir: output_dir.join("models"),
            base_dir: base.to_owned(),
            data_dir,
            output_dir,
        }
    }
}

pub fn format_summary(paths: &ProjectPaths) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Base directory: {}", paths.base_dir);
    let _ = writeln!(out, "Data directory: {}", paths.data_dir);
    let _ = writeln!(out, "Train CSV:      {}", paths.train_csv);
    let _ = writeln!(out, "Test CSV:       {}", paths.test_csv);
    let _ = writeln!(out, "Output dir:     {}", paths.output_dir);
    let _ = writeln!(out, "Models dir:     {}", paths.models_dir);
    out
}
