// crates/update_repos/src/lib.rs

use anyhow::{bail, Result};

pub mod cli;
pub mod repositories;
pub mod update;

pub use cli::{Args, UpdateOptions};
pub use repositories::find_repositories;
pub use update::{update_all, update_repository, UpdateOutcome, UpdateSummary};

/// Fails unless the root directory exists.
pub fn preflight_checks(options: &UpdateOptions) -> Result<()> {
    if !options.root.is_dir() {
        bail!("Root directory {} does not exist", options.root.display());
    }
    Ok(())
}

/// Validates the root, then updates every repository found below it.
pub fn run(options: &UpdateOptions) -> Result<UpdateSummary> {
    preflight_checks(options)?;
    let repositories = find_repositories(&options.root)?;
    Ok(update_all(&repositories, options.verbose))
}
