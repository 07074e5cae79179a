//! Ahead/behind counts against the upstream branch.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use git2::{Branch, Oid, Repository};

/// Commits that differ between the local branch and its upstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Divergence {
    /// Commits on the local branch that the upstream lacks.
    pub ahead: usize,
    /// Commits on the upstream that the local branch lacks.
    pub behind: usize,
}

/// Count how far HEAD has diverged from its upstream.
///
/// A branch without an upstream (or an unborn or detached HEAD) is not an
/// error and reports zero in both directions, as does a failed graph walk.
///
/// # Arguments
///
/// * `repo` - The repository
#[must_use]
pub fn ahead_behind(repo: &Repository) -> Divergence {
    let Some((local, upstream)) = upstream_targets(repo) else {
        return Divergence::default();
    };

    match repo.graph_ahead_behind(local, upstream) {
        Ok((ahead, behind)) => {
            log::debug!("{ahead} ahead, {behind} behind upstream");
            Divergence { ahead, behind }
        }
        Err(e) => {
            log::debug!("Failed to compare {local} with {upstream}: {e}");
            Divergence::default()
        }
    }
}

/// Commit ids of HEAD and of its upstream, if both resolve.
fn upstream_targets(repo: &Repository) -> Option<(Oid, Oid)> {
    let head = repo
        .head()
        .inspect_err(|e| log::debug!("No HEAD to compare: {e}"))
        .ok()?;
    let local = Branch::wrap(head);
    let upstream = local
        .upstream()
        .inspect_err(|e| log::debug!("No upstream for HEAD: {e}"))
        .ok()?;

    Some((local.get().target()?, upstream.get().target()?))
}
