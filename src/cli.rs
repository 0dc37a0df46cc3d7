use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "nbpaths",
    version,
    about = "Standardized path configuration for the IdentifyTheAuthor notebooks"
)]
pub struct Cli {
    /// Change to this directory before doing anything else.
    #[arg(short = 'C', long = "chdir")]
    pub chdir: Option<PathBuf>,
    /// Report what would change without writing any file.
    #[arg(short = 'n', long = "dry-run", global = true)]
    pub dry_run: bool,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rewrite notebooks in the project root to use the shared path names.
    ///
    /// Runs when no subcommand is given.
    Rewrite,
    /// Print the resolved project layout, creating the output directories.
    Paths,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}
