// crates/setup_repo/src/clone.rs

use anyhow::{bail, Context, Result};
use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;

use execute_command::executed_successfully;
use status_report::print_status;

use crate::options::{Options, ORIGINAL_DIR};

/// Where `git clone` writes: the `original` snapshot in prepare mode, the repository directory otherwise.
pub fn clone_destination(options: &Options) -> Result<PathBuf> {
    let repo_dir = options.repo_dir()?;
    Ok(if options.prepare {
        repo_dir.join(ORIGINAL_DIR)
    } else {
        repo_dir
    })
}

/// Clones `<remote>/<namespace>/<repo>` unless cloning is disabled.
pub fn clone_repo(options: &Options) -> Result<()> {
    if !options.clones() {
        log::debug!("clone disabled, using existing {}", options.repo_dir()?.display());
        return Ok(());
    }

    let url = options.clone_url()?;
    let destination = clone_destination(options)?;
    print_status(&format!("Cloning {} to {}", url, destination.display()), options.verbose);

    // In prepare mode the repository directory is created here; it is removed again if the clone fails.
    let created_dir = if options.prepare {
        let repo_dir = options.repo_dir()?;
        fs::create_dir_all(&repo_dir)
            .with_context(|| format!("Failed cloning {} to {}", url, destination.display()))?;
        Some(repo_dir)
    } else {
        None
    };

    let args = [OsStr::new("clone"), OsStr::new(&url), destination.as_os_str()];
    if !executed_successfully("git", &args, None, options.verbose) {
        if let Some(repo_dir) = created_dir {
            if let Err(err) = fs::remove_dir_all(&repo_dir) {
                log::warn!("could not remove {}: {}", repo_dir.display(), err);
            }
        }
        bail!("Failed cloning {} to {}", url, destination.display());
    }
    Ok(())
}
