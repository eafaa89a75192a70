// crates/setup_repo/src/options.rs

use anyhow::{anyhow, Result};
use std::path::PathBuf;

use substitute_placeholders::Placeholders;

use crate::cli::Args;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "setuprepo.yml";

/// Subdirectory holding the pristine clone in prepare mode.
pub const ORIGINAL_DIR: &str = "original";
/// Subdirectory holding the patched copy in prepare mode.
pub const MODIFIED_DIR: &str = "modified";

/// The resolved options for a single invocation: command-line values,
/// filled in from the config file where the command line left them unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub repo: String,
    pub remote: Option<String>,
    pub namespace: Option<String>,
    pub target: Option<String>,
    pub notes: Option<String>,
    pub template: Option<String>,
    pub patchfile: Option<String>,
    pub verbose: bool,
    pub no_clone: bool,
    pub no_patch: bool,
    pub no_modify: bool,
    pub no_template: bool,
    pub prepare: bool,
    pub config: PathBuf,
    /// Whether the config path was given explicitly (a missing explicit file is an error).
    pub config_explicit: bool,
}

impl From<Args> for Options {
    fn from(args: Args) -> Self {
        let config_explicit = args.config.is_some();
        Options {
            repo: args.repo,
            remote: non_empty(args.remote),
            namespace: non_empty(args.namespace),
            target: non_empty(args.target),
            notes: non_empty(args.notes),
            template: non_empty(args.template),
            patchfile: non_empty(args.patchfile),
            verbose: args.verbose,
            no_clone: args.no_clone,
            no_patch: args.no_patch,
            no_modify: args.no_modify,
            no_template: args.no_template,
            prepare: args.prepare,
            config: args.config.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE)),
            config_explicit,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Returns the value of a required parameter or a `Missing parameter` error.
pub(crate) fn required<'a>(value: &'a Option<String>, key: &str) -> Result<&'a str> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| anyhow!("Missing parameter: {}", key))
}

impl Options {
    pub fn clones(&self) -> bool {
        !self.no_clone
    }

    pub fn uses_patch(&self) -> bool {
        !self.no_patch && self.patchfile.is_some()
    }

    pub fn uses_template(&self) -> bool {
        !self.no_template && self.template.is_some()
    }

    pub fn target_dir(&self) -> Result<PathBuf> {
        Ok(PathBuf::from(required(&self.target, "target")?))
    }

    /// `<target>/<repo>`
    pub fn repo_dir(&self) -> Result<PathBuf> {
        Ok(self.target_dir()?.join(&self.repo))
    }

    /// Directory that receives the patch: the `modified` copy in prepare mode.
    pub fn work_dir(&self) -> Result<PathBuf> {
        let repo_dir = self.repo_dir()?;
        Ok(if self.prepare {
            repo_dir.join(MODIFIED_DIR)
        } else {
            repo_dir
        })
    }

    /// `<remote>/<namespace>/<repo>`
    pub fn clone_url(&self) -> Result<String> {
        Ok(format!(
            "{}/{}/{}",
            required(&self.remote, "remote")?,
            required(&self.namespace, "namespace")?,
            self.repo
        ))
    }

    pub fn notes_dir(&self) -> Result<PathBuf> {
        match self.notes.as_deref() {
            Some(notes) => Ok(PathBuf::from(notes)),
            None => self.target_dir(),
        }
    }

    /// `<notes>/<repo>.txt`
    pub fn notes_file(&self) -> Result<PathBuf> {
        Ok(self.notes_dir()?.join(format!("{}.txt", self.repo)))
    }

    /// Substitution values; unset options substitute as empty text.
    pub fn placeholders(&self) -> Placeholders {
        Placeholders {
            namespace: self.namespace.clone().unwrap_or_default(),
            remote: self.remote.clone().unwrap_or_default(),
            repo: self.repo.clone(),
            target: self.target.clone().unwrap_or_default(),
        }
    }
}
