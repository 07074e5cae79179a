//! Branch label resolution.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fmt;
use std::ops::RangeInclusive;

use git2::{ReferenceType, Repository};

use crate::error::GitError;

/// Upper bound on the label length in bytes.
pub const MAX_LABEL_LEN: usize = 255;

/// Abbreviation used when `core.abbrev` is unset or unusable.
const DEFAULT_ABBREV: usize = 7;

/// Values git itself accepts for `core.abbrev`.
const VALID_ABBREV: RangeInclusive<i32> = 4..=40;

/// Extra id characters shown beyond the configured abbreviation.
const ABBREV_PADDING: usize = 2;

const DETACHED_MARKER: char = ':';
const BRANCH_NAMESPACE: &str = "refs/heads/";

/// Human-readable name for the current checkout.
///
/// Either a branch short name, or `:` followed by an abbreviated commit id
/// when HEAD is detached. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchLabel(String);

impl BranchLabel {
    /// Build a label, cutting it to [`MAX_LABEL_LEN`] bytes.
    ///
    /// # Errors
    ///
    /// * If `label` is empty
    pub fn new(mut label: String) -> Result<Self, GitError> {
        if label.len() > MAX_LABEL_LEN {
            let mut end = MAX_LABEL_LEN;
            while !label.is_char_boundary(end) {
                end -= 1;
            }
            label.truncate(end);
        }

        if label.is_empty() {
            return Err(GitError::EmptyLabel);
        }

        Ok(Self(label))
    }

    /// The label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BranchLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolve the label for the repository's HEAD.
///
/// HEAD is looked up by name first and through the repository's head
/// resolution second.
///
/// # Arguments
///
/// * `repo` - The repository
///
/// # Errors
///
/// * If HEAD cannot be resolved either way
/// * If the resolved label is empty
pub fn resolve_branch_label(repo: &Repository) -> Result<BranchLabel, GitError> {
    let head = repo
        .find_reference("HEAD")
        .or_else(|e| {
            log::debug!("HEAD lookup failed ({e}), resolving repository head");
            repo.head()
        })
        .map_err(GitError::ReferenceUnavailable)?;

    let label = match head.kind() {
        Some(ReferenceType::Direct) => {
            let oid = head.target().ok_or(GitError::EmptyLabel)?;
            detached_label(&oid.to_string(), abbrev_length(repo))
        }
        _ => head
            .symbolic_target()
            .map(branch_short_name)
            .unwrap_or_default()
            .to_string(),
    };

    log::debug!("Resolved branch label {label:?}");
    BranchLabel::new(label)
}

/// Read `core.abbrev`, falling back to the default when unset or invalid.
fn abbrev_length(repo: &Repository) -> usize {
    repo.config()
        .and_then(|config| config.get_i32("core.abbrev"))
        .ok()
        .filter(|length| VALID_ABBREV.contains(length))
        .and_then(|length| usize::try_from(length).ok())
        .unwrap_or(DEFAULT_ABBREV)
}

/// `:` followed by the first `abbrev + 2` characters of `oid`.
fn detached_label(oid: &str, abbrev: usize) -> String {
    let length = (abbrev + ABBREV_PADDING).min(oid.len());
    let short = oid.get(..length).unwrap_or(oid);
    format!("{DETACHED_MARKER}{short}")
}

/// Short name for a symbolic target.
///
/// Local branches keep their full name below `refs/heads/`; anything else
/// keeps only its last path component.
fn branch_short_name(target: &str) -> &str {
    target.strip_prefix(BRANCH_NAMESPACE).unwrap_or_else(|| {
        target
            .rsplit_once('/')
            .map_or(target, |(_, last)| last)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{commit, git, init_empty_repo, init_repo};

    const OID: &str = "deadbeef1234567890abcdef1234567890abcdef";

    #[test]
    fn test_detached_label_default_abbrev() {
        let label = detached_label(OID, DEFAULT_ABBREV);
        assert_eq!(label, ":deadbeef1");
        assert_eq!(label.len(), 10);
    }

    #[test]
    fn test_detached_label_capped_at_full_id() {
        assert_eq!(detached_label(OID, 40), format!(":{OID}"));
    }

    #[test]
    fn test_branch_short_name() {
        assert_eq!(branch_short_name("refs/heads/main"), "main");
        assert_eq!(branch_short_name("refs/heads/feature/x"), "feature/x");
        assert_eq!(branch_short_name("refs/remotes/origin/main"), "main");
        assert_eq!(branch_short_name("main"), "main");
        assert_eq!(branch_short_name("refs/heads/"), "");
    }

    #[test]
    fn test_label_empty() {
        assert!(matches!(
            BranchLabel::new(String::new()),
            Err(GitError::EmptyLabel)
        ));
    }

    #[test]
    fn test_label_bounded_on_char_boundary() {
        let label = BranchLabel::new("é".repeat(200)).unwrap();
        assert!(label.as_str().len() <= MAX_LABEL_LEN);
        assert_eq!(label.as_str().len(), 254);
        assert!(label.as_str().chars().all(|c| c == 'é'));
    }

    #[test]
    fn test_resolve_branch() {
        let (_dir, repo) = init_repo();
        assert_eq!(resolve_branch_label(&repo).unwrap().as_str(), "main");
    }

    #[test]
    fn test_resolve_unborn_branch() {
        let (_dir, repo) = init_empty_repo();
        assert_eq!(resolve_branch_label(&repo).unwrap().as_str(), "main");
    }

    #[test]
    fn test_resolve_namespaced_branch() {
        let (dir, repo) = init_repo();
        git(dir.path(), &["checkout", "-b", "feature/x"]);
        assert_eq!(resolve_branch_label(&repo).unwrap().as_str(), "feature/x");
    }

    #[test]
    fn test_resolve_detached_with_invalid_abbrev() {
        let (dir, repo) = init_repo();
        git(dir.path(), &["config", "core.abbrev", "auto"]);
        git(dir.path(), &["checkout", "--detach"]);

        let oid = repo.head().unwrap().target().unwrap().to_string();
        let label = resolve_branch_label(&repo).unwrap();
        assert_eq!(label.as_str(), format!(":{}", &oid[..9]));
    }

    #[test]
    fn test_resolve_detached_with_configured_abbrev() {
        let (dir, repo) = init_repo();
        commit(dir.path(), "second.txt", "second");
        git(dir.path(), &["config", "core.abbrev", "10"]);
        git(dir.path(), &["checkout", "--detach", "HEAD~1"]);

        let oid = repo.head().unwrap().target().unwrap().to_string();
        let label = resolve_branch_label(&repo).unwrap();
        assert_eq!(label.as_str(), format!(":{}", &oid[..12]));
    }

    #[test]
    fn test_abbrev_out_of_range_uses_default() {
        let (_dir, repo) = init_repo();
        repo.config().unwrap().set_i32("core.abbrev", 2).unwrap();
        assert_eq!(abbrev_length(&repo), DEFAULT_ABBREV);
    }
}
