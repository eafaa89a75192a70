// crates/setup_repo/src/config_file.rs

use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;

use crate::options::Options;

static LINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*([A-Za-z][A-Za-z0-9_-]*)\s*:(.*)$").unwrap());

/// `key: value` pairs read from a config file, in file order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    entries: Vec<(String, String)>,
}

impl ConfigFile {
    /// Collects every `key: value` line; any other line is ignored.
    /// Keys are normalized so that `no-clone` and `no_clone` are the same key.
    pub fn parse(contents: &str) -> Self {
        let entries = contents
            .lines()
            .filter_map(|line| LINE_RE.captures(line))
            .map(|caps| (caps[1].replace('-', "_"), caps[2].trim().to_string()))
            .collect();
        ConfigFile { entries }
    }

    /// The first value recorded for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// A string option: empty or `false` leaves the option unset.
    fn string(&self, key: &str) -> Option<String> {
        self.get(key)
            .filter(|v| !v.is_empty() && *v != "false")
            .map(str::to_string)
    }

    /// A flag option: `false` is false, any other non-empty value is true.
    fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).filter(|v| !v.is_empty()).map(|v| v != "false")
    }
}

/// Fills every option the command line left unset from `config`.
pub fn apply_config(options: &mut Options, config: &ConfigFile) {
    let strings = [
        ("namespace", &mut options.namespace),
        ("notes", &mut options.notes),
        ("patchfile", &mut options.patchfile),
        ("remote", &mut options.remote),
        ("target", &mut options.target),
        ("template", &mut options.template),
    ];
    for (key, field) in strings {
        if field.is_none() {
            *field = config.string(key);
        }
    }

    let flags = [
        ("verbose", &mut options.verbose),
        ("no_clone", &mut options.no_clone),
        ("no_patch", &mut options.no_patch),
        ("no_modify", &mut options.no_modify),
        ("no_template", &mut options.no_template),
        ("prepare", &mut options.prepare),
    ];
    for (key, field) in flags {
        if !*field {
            if let Some(value) = config.flag(key) {
                *field = value;
            }
        }
    }
}

/// Reads `options.config` and merges it into `options`.
///
/// The default config file is optional; an explicitly requested one must be readable.
pub fn read_config(options: &mut Options) -> Result<()> {
    let path = options.config.clone();
    if !options.config_explicit && !path.exists() {
        log::debug!("no config file at {}, using command line only", path.display());
        return Ok(());
    }

    let contents = fs::read_to_string(&path)
        .map_err(|err| anyhow!("Could not open configuration file {}: {}", path.display(), err))?;
    let config = ConfigFile::parse(&contents);
    log::debug!("read {} entries from {}", config.entries.len(), path.display());

    apply_config(options, &config);
    Ok(())
}
