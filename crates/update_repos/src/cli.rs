// crates/update_repos/src/cli.rs

use clap::Parser;
use std::path::PathBuf;

/// Bulk updates git repositories: runs `git status` and `git pull` in every
/// repository directly below the root directory.
#[derive(Parser, Debug, Clone)]
#[command(name = "update_repos", version)]
pub struct Args {
    /// Root directory
    pub root: PathBuf,

    /// Be more verbose
    #[arg(short, long)]
    pub verbose: bool,
}

/// Options for one bulk update run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOptions {
    pub root: PathBuf,
    pub verbose: bool,
}

impl From<Args> for UpdateOptions {
    fn from(args: Args) -> Self {
        UpdateOptions {
            root: args.root,
            verbose: args.verbose,
        }
    }
}
