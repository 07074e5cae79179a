//! Repository inspection for gitprompt.
//!
//! This crate wraps the `git2` library and produces the three inputs of the
//! prompt:
//!
//! * The branch label (branch short name or abbreviated detached commit)
//! * Ahead/behind counts against the upstream branch
//! * Staged, conflicted, changed and untracked file counts
//!
//! # Example
//!
//! ```rust,ignore
//! use gitprompt_git::{ahead_behind, collect_status_counts, open_repo, resolve_branch_label};
//!
//! let repo = open_repo(Path::new("."))?;
//! let counts = collect_status_counts(&repo)?;
//! let divergence = ahead_behind(&repo);
//! let label = resolve_branch_label(&repo)?;
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod branch;
mod divergence;
mod error;
mod repo;
mod status;
#[cfg(test)]
mod testing;

pub use branch::{BranchLabel, MAX_LABEL_LEN, resolve_branch_label};
pub use divergence::{Divergence, ahead_behind};
pub use error::GitError;
pub use repo::open_repo;
pub use status::{StatusCounts, classify, collect_status_counts};
