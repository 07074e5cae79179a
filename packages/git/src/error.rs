//! Error types for git operations.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while inspecting a repository.
#[derive(Debug, Error)]
pub enum GitError {
    /// Failed to open repository.
    #[error("Failed to open repository at {}: {source}", path.display())]
    RepositoryUnavailable {
        /// Path that was attempted.
        path: PathBuf,
        /// The underlying git2 error.
        #[source]
        source: git2::Error,
    },

    /// HEAD could neither be looked up by name nor resolved.
    #[error("Failed to resolve HEAD: {0}")]
    ReferenceUnavailable(#[source] git2::Error),

    /// HEAD resolved to an empty branch label.
    #[error("HEAD resolved to an empty branch label")]
    EmptyLabel,

    /// Failed to get repository status.
    #[error("Failed to get repository status: {0}")]
    StatusError(#[source] git2::Error),
}
