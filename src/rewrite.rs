use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use crate::notebook;
use crate::rules;

const NOTEBOOK_EXT: &str = "ipynb";

/// Outcome of one batch run.
#[derive(Debug, Default)]
pub struct Summary {
    pub modified: Vec<String>,
    pub skipped: Vec<String>,
    pub unchanged: usize,
}

/// Process every notebook directly under `root`. Each file is handled
/// independently: unparsable ones are skipped and reported, the rest are
/// rewritten in place only when something actually changed.
pub fn process(root: &Utf8Path, dry_run: bool) -> Result<Summary> {
    let notebooks = discover(root)?;
    debug!("found {} notebook(s) under {}", notebooks.len(), root);

    let mut summary = Summary::default();
    for path in notebooks {
        let name = path.file_name().unwrap_or(path.as_str()).to_owned();

        let mut nb = match notebook::load(&path) {
            Ok(nb) => nb,
            Err(err) => {
                println!("Skipping {}: unable to parse ({:#})", name, err);
                summary.skipped.push(name);
                continue;
            }
        };

        if rules::apply(&mut nb)? {
            if dry_run {
                println!("[dry-run] would update {}", name);
            } else {
                notebook::save(&nb, &path)?;
                println!("Updated: {}", name);
            }
            summary.modified.push(name);
        } else {
            println!("No changes needed: {}", name);
            summary.unchanged += 1;
        }
    }

    Ok(summary)
}

/// Non-recursive scan of `root` for regular `*.ipynb` files. Directory
/// order is whatever the filesystem yields.
fn discover(root: &Utf8Path) -> Result<Vec<Utf8PathBuf>> {
    let entries = root
        .read_dir_utf8()
        .with_context(|| format!("reading directory {}", root))?;

    let mut notebooks = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("reading directory {}", root))?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if entry.path().extension() == Some(NOTEBOOK_EXT) {
            notebooks.push(entry.path().to_owned());
        }
    }
    Ok(notebooks)
}
