use anyhow::Result;

use crate::notebook::{Cell, Notebook};
use crate::templates;

/// Sentinel line marking a notebook that already carries the path preamble.
pub const MARKER: &str = "# === Standardized path configuration added automatically ===";

/// Exact-substring rewrites applied to every code line. Order matters:
/// each rule sees the output of the ones before it.
const REPLACEMENTS: &[(&str, &str)] = &[
    (
        "/kaggle/input/identify-the-author/train/train.csv",
        "str(TRAIN_CSV)",
    ),
    (
        "/kaggle/input/identify-the-author/test/test.csv",
        "str(TEST_CSV)",
    ),
    ("data/train/train.csv", "str(TRAIN_CSV)"),
    ("data/test/test.csv", "str(TEST_CSV)"),
];

/// Whole-line rewrites for assignment statements, applied after the
/// substring pass. Later entries win when several needles hit one line.
const LINE_NORMALIZERS: &[(&str, &str)] = &[
    ("train_path =", "train_path = str(TRAIN_CSV)"),
    ("test_path", "test_path  = str(TEST_CSV)"),
    ("TRAIN_PATH =", "TRAIN_PATH = str(TRAIN_CSV)"),
    ("TEST_PATH =", "TEST_PATH  = str(TEST_CSV)"),
    (
        "TEST_CSV = '/kaggle/input/identify-the-author/test/test.csv'",
        "TEST_CSV = str(TEST_CSV)  # standardized",
    ),
];

/// Rewrite a single source line: substring replacements first, then line
/// normalizers. A normalizer overwrites the whole line, keeping the line's
/// trailing-newline state so reruns settle instead of flip-flopping.
pub fn rewrite_line(line: &str) -> String {
    let mut current = line.to_owned();
    for (old, new) in REPLACEMENTS {
        if current.contains(old) {
            current = current.replace(old, new);
        }
    }
    for (needle, replacement) in LINE_NORMALIZERS {
        if current.contains(needle) {
            let newline = if current.ends_with('\n') { "\n" } else { "" };
            current = format!("{replacement}{newline}");
        }
    }
    current
}

fn has_marker(notebook: &Notebook) -> bool {
    notebook
        .cells
        .iter()
        .any(|cell| cell.is_code() && cell.source.iter().any(|line| line.contains(MARKER)))
}

/// Annotate and normalize one notebook in memory. Returns whether anything
/// changed. The inserted preamble cell matches no rule, so it survives
/// later passes untouched.
pub fn apply(notebook: &mut Notebook) -> Result<bool> {
    let mut changed = false;

    if !has_marker(notebook) {
        notebook.cells.insert(0, Cell::code(templates::preamble_lines()?));
        changed = true;
    }

    for cell in &mut notebook.cells {
        if !cell.is_code() {
            continue;
        }
        for line in &mut cell.source {
            let rewritten = rewrite_line(line);
            if rewritten != *line {
                *line = rewritten;
                changed = true;
            }
        }
    }

    Ok(changed)
}
