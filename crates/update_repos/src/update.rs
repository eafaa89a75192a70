// crates/update_repos/src/update.rs

use std::path::{Path, PathBuf};

use execute_command::executed_successfully;
use status_report::{print_error, print_status};

/// What happened to a single repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    /// `git status` failed, so no pull was attempted.
    StatusFailed,
    PullFailed,
}

impl UpdateOutcome {
    pub fn describe(self) -> &'static str {
        match self {
            UpdateOutcome::Updated => "updated",
            UpdateOutcome::StatusFailed => "git status failed",
            UpdateOutcome::PullFailed => "git pull failed",
        }
    }
}

/// Results of a bulk update.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UpdateSummary {
    pub total: usize,
    pub updated: usize,
    pub failed: Vec<(PathBuf, UpdateOutcome)>,
}

impl UpdateSummary {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Runs `git status` and, only if that succeeds, `git pull` inside `repo`.
pub fn update_repository(repo: &Path, verbose: bool) -> UpdateOutcome {
    print_status(&format!("Working on {}", repo.display()), verbose);

    if !executed_successfully("git", &["status"], Some(repo), verbose) {
        log::debug!("skipping pull in {}", repo.display());
        return UpdateOutcome::StatusFailed;
    }
    if executed_successfully("git", &["pull"], Some(repo), verbose) {
        UpdateOutcome::Updated
    } else {
        UpdateOutcome::PullFailed
    }
}

/// Updates every repository in order. A failing repository is reported and skipped.
pub fn update_all(repositories: &[PathBuf], verbose: bool) -> UpdateSummary {
    let mut summary = UpdateSummary {
        total: repositories.len(),
        ..UpdateSummary::default()
    };

    for repo in repositories {
        match update_repository(repo, verbose) {
            UpdateOutcome::Updated => summary.updated += 1,
            outcome => {
                print_error(&format!("Failed updating {}: {}", repo.display(), outcome.describe()));
                summary.failed.push((repo.clone(), outcome));
            }
        }
    }

    print_status(
        &format!("Updated {} of {} repositories", summary.updated, summary.total),
        verbose,
    );
    summary
}
