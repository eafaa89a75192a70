// crates/setup_repo/src/preflight.rs

use anyhow::{bail, Result};
use std::path::Path;

use crate::options::{required, Options, ORIGINAL_DIR};

/// Verifies that `options` describe a run that can succeed, failing on the
/// first problem found.
pub fn preflight_checks(options: &Options) -> Result<()> {
    if options.clones() {
        required(&options.remote, "remote")?;
    }
    let target = required(&options.target, "target")?;
    if options.clones() {
        required(&options.namespace, "namespace")?;
    }

    if !Path::new(target).is_dir() {
        bail!("Target directory does not exist");
    }

    let repo_dir = options.repo_dir()?;
    if options.clones() {
        if repo_dir.exists() {
            bail!("Target repository already exists");
        }
    } else {
        if !repo_dir.is_dir() {
            bail!("Target repository does not exist");
        }
        if options.prepare && !repo_dir.join(ORIGINAL_DIR).is_dir() {
            bail!("Original snapshot {} does not exist", repo_dir.join(ORIGINAL_DIR).display());
        }
    }

    if options.uses_template() {
        let template = required(&options.template, "template")?;
        if !Path::new(template).is_file() {
            bail!("Template file does not exist");
        }
        if !options.notes_dir()?.is_dir() {
            bail!("Notes directory does not exist");
        }
        let notes_file = options.notes_file()?;
        if notes_file.exists() {
            bail!("Notes file {} already exists", notes_file.display());
        }
    }

    if options.uses_patch() {
        let patchfile = required(&options.patchfile, "patchfile")?;
        if !Path::new(patchfile).is_file() {
            bail!("Patchfile does not exist");
        }
    }

    Ok(())
}
