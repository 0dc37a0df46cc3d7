use anyhow::{Context, Result, anyhow};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "templates"]
struct Templates;

const PREAMBLE: &str = "preamble.py";

fn get_string(path: &str) -> Result<String> {
    let file =
        Templates::get(path).ok_or_else(|| anyhow!("embedded template `{}` missing", path))?;
    std::str::from_utf8(file.data.as_ref())
        .with_context(|| format!("decoding embedded template `{}`", path))
        .map(str::to_owned)
}

/// Preamble source as notebook lines, each keeping its trailing newline.
pub fn preamble_lines() -> Result<Vec<String>> {
    let text = get_string(PREAMBLE)?;
    Ok(text.split_inclusive('\n').map(str::to_owned).collect())
}
