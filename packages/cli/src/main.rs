//! gitprompt CLI entry point.
//!
//! Prints a one-line summary of the repository in the current directory for
//! use in a shell prompt.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod args;
mod output;

use std::path::Path;

use clap::Parser;

use args::Args;
use gitprompt_config::PromptConfig;
use gitprompt_git::{
    StatusCounts, ahead_behind, collect_status_counts, open_repo, resolve_branch_label,
};
use gitprompt_render::render;

fn main() {
    // Help, version and usage errors are reported by clap; the prompt exits 0
    // regardless.
    if let Err(e) = Args::try_parse() {
        let _ = e.print();
        return;
    }

    pretty_env_logger::init();

    if let Err(e) = run(&PromptConfig::default()) {
        log::debug!("No prompt: {e}");
    }
}

/// Inspect the repository and print the prompt line.
///
/// Nothing is printed unless the branch label resolves.
fn run(config: &PromptConfig) -> Result<(), Box<dyn std::error::Error>> {
    let repo = open_repo(Path::new("."))?;

    let counts = collect_status_counts(&repo).unwrap_or_else(|e| {
        log::debug!("Ignoring status failure: {e}");
        StatusCounts::default()
    });
    let divergence = ahead_behind(&repo);
    let label = resolve_branch_label(&repo)?;

    output::print_prompt(&render(config, &label, divergence, &counts))?;
    Ok(())
}
