//! Prompt line rendering.
//!
//! Turns a branch label, divergence and status counts into the colored
//! `[branch<behind>ahead|-staged!conflicts+changed_untracked]` line. Zero
//! counts are left out; with no file counts at all the clean symbol is shown
//! instead.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use gitprompt_config::{PromptConfig, Segment};
use gitprompt_git::{BranchLabel, Divergence, StatusCounts};

/// Render the prompt line, trailing newline included.
#[must_use]
pub fn render(
    config: &PromptConfig,
    label: &BranchLabel,
    divergence: Divergence,
    counts: &StatusCounts,
) -> String {
    let mut line = String::from(config.prefix);

    line.push_str(&config.branch_color);
    line.push_str(label.as_str());
    line.push_str(&config.reset);

    push_count(&mut line, config, &config.behind, divergence.behind);
    push_count(&mut line, config, &config.ahead, divergence.ahead);

    line.push_str(config.separator);

    if counts.is_clean() {
        push_segment(&mut line, config, &config.clean, "");
    } else {
        push_count(&mut line, config, &config.staged, counts.staged);
        push_count(&mut line, config, &config.conflicts, counts.conflicts);
        push_count(&mut line, config, &config.changed, counts.changed);
        push_count(&mut line, config, &config.untracked, counts.untracked);
    }

    line.push_str(config.suffix);
    line.push('\n');
    line
}

/// Append a colored symbol and count, skipping zero.
fn push_count(line: &mut String, config: &PromptConfig, segment: &Segment, count: usize) {
    if count > 0 {
        push_segment(line, config, segment, &count.to_string());
    }
}

fn push_segment(line: &mut String, config: &PromptConfig, segment: &Segment, text: &str) {
    line.push_str(&segment.color);
    line.push_str(segment.symbol);
    line.push_str(text);
    line.push_str(&config.reset);
}
