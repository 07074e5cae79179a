//! File status classification.
//!
//! Every status entry lands in at most one bucket, chosen by the first rule
//! whose mask it intersects. Conflicted files are the exception: they count
//! as both conflicts and changes.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use git2::{Repository, Status, StatusOptions};

use crate::error::GitError;

/// Per-category file counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    /// New files outside the index.
    pub untracked: usize,
    /// Files with unresolved merge conflicts.
    pub conflicts: usize,
    /// Files with working tree changes, conflicts included.
    pub changed: usize,
    /// Files with changes in the index.
    pub staged: usize,
}

#[derive(Debug, Clone, Copy)]
enum Bucket {
    Untracked,
    Conflicts,
    Changed,
    Staged,
}

struct Rule {
    mask: Status,
    buckets: &'static [Bucket],
}

const STAGED: Status = Status::INDEX_NEW
    .union(Status::INDEX_MODIFIED)
    .union(Status::INDEX_DELETED)
    .union(Status::INDEX_RENAMED)
    .union(Status::INDEX_TYPECHANGE);

const WORKTREE_CHANGED: Status = Status::WT_MODIFIED
    .union(Status::WT_DELETED)
    .union(Status::WT_RENAMED)
    .union(Status::WT_TYPECHANGE);

/// Evaluated top to bottom; the first intersecting rule wins.
const RULES: &[Rule] = &[
    Rule {
        mask: Status::IGNORED,
        buckets: &[],
    },
    Rule {
        mask: STAGED,
        buckets: &[Bucket::Staged],
    },
    Rule {
        mask: Status::CONFLICTED,
        buckets: &[Bucket::Conflicts, Bucket::Changed],
    },
    Rule {
        mask: WORKTREE_CHANGED,
        buckets: &[Bucket::Changed],
    },
    Rule {
        mask: Status::WT_NEW,
        buckets: &[Bucket::Untracked],
    },
];

impl StatusCounts {
    /// Count one status entry.
    pub fn record(&mut self, status: Status) {
        let Some(rule) = RULES.iter().find(|rule| status.intersects(rule.mask)) else {
            return;
        };

        for bucket in rule.buckets {
            *self.bucket_mut(*bucket) += 1;
        }
    }

    /// Whether nothing is staged, conflicted, changed or untracked.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.total() == 0
    }

    /// Sum over all categories.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.untracked + self.conflicts + self.changed + self.staged
    }

    fn bucket_mut(&mut self, bucket: Bucket) -> &mut usize {
        match bucket {
            Bucket::Untracked => &mut self.untracked,
            Bucket::Conflicts => &mut self.conflicts,
            Bucket::Changed => &mut self.changed,
            Bucket::Staged => &mut self.staged,
        }
    }
}

/// Classify a sequence of status flag sets. Order does not matter.
#[must_use]
pub fn classify<I>(statuses: I) -> StatusCounts
where
    I: IntoIterator<Item = Status>,
{
    statuses
        .into_iter()
        .fold(StatusCounts::default(), |mut counts, status| {
            counts.record(status);
            counts
        })
}

/// Enumerate the repository's status entries and classify them.
///
/// Untracked directories are recursed so each untracked file counts once.
///
/// # Arguments
///
/// * `repo` - The repository
///
/// # Errors
///
/// * If the repository status cannot be read
pub fn collect_status_counts(repo: &Repository) -> Result<StatusCounts, GitError> {
    log::debug!("Collecting status counts");

    let mut opts = StatusOptions::new();
    opts.include_untracked(true)
        .recurse_untracked_dirs(true)
        .include_ignored(false);

    let statuses = repo
        .statuses(Some(&mut opts))
        .map_err(GitError::StatusError)?;

    let counts = classify(statuses.iter().map(|entry| entry.status()));

    log::debug!("Status counts: {counts:?}");
    Ok(counts)
}
