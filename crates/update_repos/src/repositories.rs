// crates/update_repos/src/repositories.rs

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map_or(false, |name| name.starts_with('.'))
}

/// Returns every directory directly below `root` that contains a `.git/config`
/// file, as absolute paths sorted by name. Hidden directories are skipped.
pub fn find_repositories(root: &Path) -> Result<Vec<PathBuf>> {
    let root = root
        .canonicalize()
        .with_context(|| format!("Could not resolve {}", root.display()))?;

    let repositories = WalkDir::new(&root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_dir() && !is_hidden(entry))
        .map(DirEntry::into_path)
        .filter(|dir| dir.join(".git").join("config").is_file())
        .collect::<Vec<_>>();

    log::debug!("found {} repositories under {}", repositories.len(), root.display());
    Ok(repositories)
}
