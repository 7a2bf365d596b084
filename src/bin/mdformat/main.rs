mod config;
mod formatter;
mod logger;

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;

use crate::config::Config;

#[derive(Parser)]
#[command(
    author,
    version,
    name = env!("CARGO_BIN_NAME"),
    about = "Rename all matching media files in a directory to '<title>E<episode>.<ext>'"
)]
pub struct Args {
    /// Optional input directory
    #[arg(value_hint = clap::ValueHint::DirPath)]
    path: Option<PathBuf>,

    /// Base title for the renamed files. Prompted for if not given.
    #[arg(short, long)]
    title: Option<String>,

    /// Rename files without asking for confirmation
    #[arg(short, long)]
    force: bool,

    /// Only print changes without renaming files
    #[arg(short, long)]
    print: bool,

    /// Match the title case-insensitively
    #[arg(short, long)]
    ignore_case: bool,

    /// Write a log file of all renames
    #[arg(short = 'L', long)]
    log: bool,

    /// Create shell completion
    #[arg(short = 'l', long, name = "SHELL")]
    completion: Option<Shell>,

    /// Print verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if let Some(shell) = args.completion {
        return media_formatter::generate_shell_completion(shell, Args::command(), true, env!("CARGO_BIN_NAME"));
    }
    let path = media_formatter::resolve_input_directory(args.path.as_deref())?;
    let config = Config::from_args(args)?;
    formatter::format_directory(&path, &config)
}
