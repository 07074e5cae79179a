//! Repository access.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use git2::Repository;

use crate::error::GitError;

/// Open a git repository at the specified path.
///
/// The path must be the repository root (or its `.git` directory); parent
/// directories are not searched.
///
/// # Arguments
///
/// * `path` - Path to the repository root
///
/// # Errors
///
/// * If the path is not a git repository
/// * If the repository cannot be opened
pub fn open_repo(path: &Path) -> Result<Repository, GitError> {
    log::debug!("Opening repository at {}", path.display());

    Repository::open(path).map_err(|e| GitError::RepositoryUnavailable {
        path: path.to_path_buf(),
        source: e,
    })
}
