// crates/setup_repo/src/patch.rs

use anyhow::{anyhow, bail, Context, Result};
use std::ffi::OsStr;
use std::path::Path;
use tempfile::NamedTempFile;

use execute_command::executed_successfully;
use status_report::print_status;
use substitute_placeholders::substitute_file;

use crate::options::{required, Options};

/// Applies the configured patch file to the working copy with `patch -Np1`.
///
/// The patch is staged in a temporary file (with placeholders substituted
/// unless `--no-modify` is set); the file is removed when this returns.
pub fn patch_repo(options: &Options) -> Result<()> {
    if !options.uses_patch() {
        return Ok(());
    }

    let patchfile = Path::new(required(&options.patchfile, "patchfile")?);
    let work_dir = options.work_dir()?;
    print_status(
        &format!("Patching {} with {}", work_dir.display(), patchfile.display()),
        options.verbose,
    );

    let failed = || anyhow!("Failed patching {} with {}", work_dir.display(), patchfile.display());

    let staged = stage_patch(options, patchfile).with_context(failed)?;
    let args = [OsStr::new("-Np1"), OsStr::new("-i"), staged.path().as_os_str()];
    if !executed_successfully("patch", &args, Some(&work_dir), options.verbose) {
        return Err(failed());
    }
    Ok(())
}

/// Copies `patchfile` into a fresh temporary file, substituting placeholders unless disabled.
pub fn stage_patch(options: &Options, patchfile: &Path) -> Result<NamedTempFile> {
    let staged = NamedTempFile::new().context("Could not create temporary patch file")?;
    log::debug!("staging {} at {}", patchfile.display(), staged.path().display());

    if options.no_modify {
        if !executed_successfully("cp", &[patchfile, staged.path()], None, options.verbose) {
            bail!("Could not copy {}", patchfile.display());
        }
    } else {
        let placeholders = options.placeholders();
        print_status(
            &format!(
                "Modifying patchfile, replacing NAMESPACE with {}, REMOTE with {}, REPO with {} and TARGET with {}",
                placeholders.namespace, placeholders.remote, placeholders.repo, placeholders.target
            ),
            options.verbose,
        );
        substitute_file(patchfile, staged.path(), &placeholders)?;
    }
    Ok(staged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn options(patchfile: &Path) -> Options {
        Options {
            repo: "widget".to_string(),
            remote: Some("https://git.example.com".to_string()),
            namespace: Some("acme".to_string()),
            target: Some("/srv".to_string()),
            patchfile: Some(patchfile.to_string_lossy().into_owned()),
            ..Options::default()
        }
    }

    #[test]
    fn test_stage_patch_substitutes_placeholders() {
        let dir = tempdir().expect("failed to create temp dir");
        let patchfile = dir.path().join("fix.patch");
        fs::write(&patchfile, "+url = REMOTE/NAMESPACE/REPO\n+path = TARGET\n").unwrap();

        let staged = stage_patch(&options(&patchfile), &patchfile).expect("staging should succeed");
        let contents = fs::read_to_string(staged.path()).unwrap();
        assert_eq!(contents, "+url = https://git.example.com/acme/widget\n+path = /srv\n");
    }

    #[test]
    #[cfg(unix)]
    fn test_stage_patch_without_modification() {
        let dir = tempdir().expect("failed to create temp dir");
        let patchfile = dir.path().join("fix.patch");
        fs::write(&patchfile, "+url = REMOTE/NAMESPACE/REPO\n").unwrap();
        let mut opts = options(&patchfile);
        opts.no_modify = true;

        let staged = stage_patch(&opts, &patchfile).expect("staging should succeed");
        assert_eq!(fs::read_to_string(staged.path()).unwrap(), "+url = REMOTE/NAMESPACE/REPO\n");
    }

    #[test]
    fn test_staged_file_is_removed_on_drop() {
        let dir = tempdir().expect("failed to create temp dir");
        let patchfile = dir.path().join("fix.patch");
        fs::write(&patchfile, "REPO\n").unwrap();

        let staged = stage_patch(&options(&patchfile), &patchfile).unwrap();
        let staged_path = staged.path().to_path_buf();
        assert!(staged_path.exists());
        drop(staged);
        assert!(!staged_path.exists());
    }

    #[test]
    fn test_patch_disabled_is_a_no_op() {
        let dir = tempdir().expect("failed to create temp dir");
        let mut opts = options(&dir.path().join("missing.patch"));
        opts.no_patch = true;
        assert!(patch_repo(&opts).is_ok());
    }
}
