// crates/setup_repo/src/lib.rs

//! Clones a repository into a target directory, optionally keeps a pristine
//! copy next to a modified one, applies a patch and creates a notes file.

use anyhow::Result;
use std::path::PathBuf;

pub mod cli;
pub mod clone;
pub mod config_file;
pub mod notes;
pub mod options;
pub mod patch;
pub mod prepare;
pub mod preflight;

pub use cli::Args;
pub use config_file::{apply_config, read_config, ConfigFile};
pub use options::{Options, DEFAULT_CONFIG_FILE};
pub use preflight::preflight_checks;

/// Runs every step for already merged `options`, stopping at the first failure.
///
/// Returns the repository directory (`<target>/<repo>`) on success.
pub fn run(options: &Options) -> Result<PathBuf> {
    log::debug!("resolved options: {:?}", options);
    preflight_checks(options)?;
    clone::clone_repo(options)?;
    prepare::prepare_repo(options)?;
    patch::patch_repo(options)?;
    notes::create_notes(options)?;
    options.repo_dir()
}
