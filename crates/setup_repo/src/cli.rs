// crates/setup_repo/src/cli.rs

use clap::Parser;
use std::path::PathBuf;

/// Clones and configures (patches) a git repository.
///
/// Values not given on the command line are read from the config file
/// (`setuprepo.yml` by default), one `key: value` per line.
#[derive(Parser, Debug, Clone)]
#[command(name = "setup_repo", version)]
pub struct Args {
    /// Repository name
    pub repo: String,

    /// Remote repository address
    #[arg(short, long)]
    pub remote: Option<String>,

    /// Namespace of the repository
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Local target for the repository structure
    #[arg(short, long)]
    pub target: Option<String>,

    /// Directory in which to create the notes file (defaults to the target)
    #[arg(long)]
    pub notes: Option<String>,

    /// Notes template
    #[arg(long)]
    pub template: Option<String>,

    /// Patch to apply to the new repository
    #[arg(long)]
    pub patchfile: Option<String>,

    /// Config file [default: setuprepo.yml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Do not clone; work on an existing <target>/<repo>
    #[arg(long)]
    pub no_clone: bool,

    /// Do not apply the patch file
    #[arg(long)]
    pub no_patch: bool,

    /// Do not substitute placeholders in the patch file and template
    #[arg(long)]
    pub no_modify: bool,

    /// Do not create a notes file
    #[arg(long)]
    pub no_template: bool,

    /// Keep a pristine `original` clone next to a patched `modified` copy
    #[arg(long)]
    pub prepare: bool,

    /// Be more verbose
    #[arg(short, long)]
    pub verbose: bool,
}
