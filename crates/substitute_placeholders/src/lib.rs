// crates/substitute_placeholders/src/lib.rs

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::fs;
use std::path::Path;

static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"NAMESPACE|REMOTE|REPO|TARGET").unwrap());

/// Values written in place of the uppercase placeholder tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholders {
    pub namespace: String,
    pub remote: String,
    pub repo: String,
    pub target: String,
}

impl Placeholders {
    fn value_for(&self, token: &str) -> &str {
        match token {
            "NAMESPACE" => &self.namespace,
            "REMOTE" => &self.remote,
            "REPO" => &self.repo,
            "TARGET" => &self.target,
            _ => "",
        }
    }
}

/// Replaces every `NAMESPACE`, `REMOTE`, `REPO` and `TARGET` token in `text`.
///
/// Matching is case sensitive and done in a single pass, so a substituted
/// value is never itself rescanned. All other bytes, including line endings,
/// are copied through unchanged.
pub fn substitute(text: &str, placeholders: &Placeholders) -> String {
    PLACEHOLDER_RE
        .replace_all(text, |caps: &Captures| placeholders.value_for(&caps[0]).to_string())
        .into_owned()
}

/// Reads `src`, substitutes placeholders and writes the result to `dst`.
pub fn substitute_file(src: &Path, dst: &Path, placeholders: &Placeholders) -> Result<()> {
    let contents = fs::read_to_string(src).with_context(|| format!("Could not read {}", src.display()))?;
    fs::write(dst, substitute(&contents, placeholders))
        .with_context(|| format!("Could not write {}", dst.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> Placeholders {
        Placeholders {
            namespace: "acme".to_string(),
            remote: "https://git.example.com".to_string(),
            repo: "widget".to_string(),
            target: "/home/user/projects".to_string(),
        }
    }

    #[test]
    fn test_replaces_all_four_tokens() {
        let input = "REMOTE/NAMESPACE/REPO cloned into TARGET";
        assert_eq!(
            substitute(input, &sample()),
            "https://git.example.com/acme/widget cloned into /home/user/projects"
        );
    }

    #[test]
    fn test_replaces_every_occurrence() {
        assert_eq!(substitute("REPO REPO REPO", &sample()), "widget widget widget");
    }

    #[test]
    fn test_each_token_maps_to_its_own_field() {
        let placeholders = sample();
        assert_eq!(placeholders.value_for("NAMESPACE"), "acme");
        assert_eq!(placeholders.value_for("REMOTE"), "https://git.example.com");
        assert_eq!(placeholders.value_for("REPO"), "widget");
        assert_eq!(placeholders.value_for("TARGET"), "/home/user/projects");
        assert_eq!(placeholders.value_for("OTHER"), "");
    }

    #[test]
    fn test_is_case_sensitive() {
        let input = "repo Repo namespace Target remote";
        assert_eq!(substitute(input, &sample()), input);
    }

    #[test]
    fn test_leaves_other_text_and_line_endings_untouched() {
        let input = "--- a/REPO.conf\r\n+++ b/REPO.conf\n@@ -1 +1 @@\n-old\n+new\n";
        assert_eq!(
            substitute(input, &sample()),
            "--- a/widget.conf\r\n+++ b/widget.conf\n@@ -1 +1 @@\n-old\n+new\n"
        );
    }

    #[test]
    fn test_tokens_embedded_in_words() {
        // Literal replacement: tokens inside longer identifiers are replaced too.
        assert_eq!(substitute("MY_REPO_NAME", &sample()), "MY_widget_NAME");
    }

    #[test]
    fn test_substituted_values_are_not_rescanned() {
        let placeholders = Placeholders {
            namespace: "TARGET".to_string(),
            remote: "REPO".to_string(),
            repo: "r".to_string(),
            target: "t".to_string(),
        };
        assert_eq!(substitute("NAMESPACE REMOTE", &placeholders), "TARGET REPO");
    }

    #[test]
    fn test_substitute_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let src = dir.path().join("template.txt");
        let dst = dir.path().join("notes.txt");
        fs::write(&src, "Notes for REPO\nSource: REMOTE/NAMESPACE/REPO\n").unwrap();

        substitute_file(&src, &dst, &sample()).expect("substitution should succeed");

        let written = fs::read_to_string(&dst).unwrap();
        assert_eq!(written, "Notes for widget\nSource: https://git.example.com/acme/widget\n");
    }

    #[test]
    fn test_substitute_file_missing_source() {
        let dir = tempdir().expect("failed to create temp dir");
        let result = substitute_file(&dir.path().join("missing"), &dir.path().join("out"), &sample());
        assert!(result.is_err());
    }
}
