use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};

use crate::cli::{Cli, Command};
use crate::paths::{self, ProjectPaths};
use crate::rewrite;

pub fn run(cli: Cli) -> Result<()> {
    apply_chdir(&cli)?;
    let root = current_working_dir()?;

    match cli.command.unwrap_or(Command::Rewrite) {
        Command::Rewrite => handle_rewrite(&root, cli.dry_run),
        Command::Paths => handle_paths(&root),
    }
}

fn handle_rewrite(root: &Utf8Path, dry_run: bool) -> Result<()> {
    let summary = rewrite::process(root, dry_run)?;

    println!("\nSummary:");
    if summary.modified.is_empty() {
        println!("No notebooks modified.");
    } else {
        if dry_run {
            println!("Notebooks that would change:");
        } else {
            println!("Modified notebooks:");
        }
        for name in &summary.modified {
            println!(" - {}", name);
        }
    }
    Ok(())
}

fn handle_paths(root: &Utf8Path) -> Result<()> {
    let paths = ProjectPaths::init(root)?;
    print!("{}", paths::format_summary(&paths));
    Ok(())
}

fn apply_chdir(cli: &Cli) -> Result<()> {
    let Some(dir) = &cli.chdir else {
        return Ok(());
    };
    std::env::set_current_dir(dir)
        .with_context(|| format!("changing directory to {}", dir.display()))
}

fn current_working_dir() -> Result<Utf8PathBuf> {
    let cwd = std::env::current_dir().context("determining current directory")?;
    Utf8PathBuf::from_path_buf(cwd).map_err(|_| anyhow!("current directory is not valid UTF-8"))
}
