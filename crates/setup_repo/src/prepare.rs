// crates/setup_repo/src/prepare.rs

use anyhow::{bail, Result};
use std::ffi::OsStr;

use execute_command::executed_successfully;
use status_report::print_status;

use crate::options::{Options, MODIFIED_DIR, ORIGINAL_DIR};

/// Copies the `original` snapshot to `modified`, so patches land next to an untouched clone.
pub fn prepare_repo(options: &Options) -> Result<()> {
    if !options.prepare {
        return Ok(());
    }

    let repo_dir = options.repo_dir()?;
    let original = repo_dir.join(ORIGINAL_DIR);
    let modified = repo_dir.join(MODIFIED_DIR);
    print_status(
        &format!("Preparing {} and {}", original.display(), modified.display()),
        options.verbose,
    );

    if !original.is_dir() {
        bail!("Failed preparing {}: {} does not exist", repo_dir.display(), original.display());
    }
    if modified.exists() {
        bail!("Failed preparing {}: {} already exists", repo_dir.display(), modified.display());
    }

    let args = [OsStr::new("-a"), original.as_os_str(), modified.as_os_str()];
    if !executed_successfully("cp", &args, None, options.verbose) {
        bail!("Failed preparing {}", repo_dir.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn prepared(target: &std::path::Path) -> Options {
        Options {
            repo: "widget".to_string(),
            target: Some(target.to_string_lossy().into_owned()),
            prepare: true,
            ..Options::default()
        }
    }

    #[test]
    fn test_not_prepared_is_a_no_op() {
        let opts = Options::default();
        assert!(prepare_repo(&opts).is_ok());
    }

    #[test]
    #[cfg(unix)]
    fn test_copies_original_to_modified() {
        let dir = tempdir().expect("failed to create temp dir");
        let original = dir.path().join("widget").join(ORIGINAL_DIR);
        fs::create_dir_all(original.join("src")).unwrap();
        fs::write(original.join("src").join("main.c"), "int main;").unwrap();

        prepare_repo(&prepared(dir.path())).expect("prepare should succeed");

        let copied = dir.path().join("widget").join(MODIFIED_DIR).join("src").join("main.c");
        assert_eq!(fs::read_to_string(copied).unwrap(), "int main;");
        assert!(original.join("src").join("main.c").is_file());
    }

    #[test]
    fn test_missing_original_fails() {
        let dir = tempdir().expect("failed to create temp dir");
        let err = prepare_repo(&prepared(dir.path())).unwrap_err();
        assert!(err.to_string().starts_with("Failed preparing"));
    }
}
