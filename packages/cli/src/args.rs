//! CLI argument definitions.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;

/// CLI arguments for gitprompt.
///
/// The prompt takes no options; only `--help` and `--version` exist.
#[derive(Debug, Parser)]
#[command(
    name = "gitprompt",
    about = "Print a compact git status line for the current directory's repository",
    long_about = "Print a compact git status line for the current directory's repository.\n\n\
                  Intended for zsh prompts, e.g. `setopt PROMPT_SUBST; RPROMPT='$(gitprompt)'`.\n\
                  Prints nothing outside a repository.",
    version
)]
pub struct Args {}
