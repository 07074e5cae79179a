//! Prompt configuration types.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use colored::Color;

use crate::escape::EscapeStyle;

/// A colored marker emitted in front of a count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Escape sequence switching to this segment's color.
    pub color: String,
    /// Symbol printed right after the color.
    pub symbol: &'static str,
}

impl Segment {
    fn new(escape: EscapeStyle, color: Color, symbol: &'static str) -> Self {
        Self {
            color: escape.bold(color),
            symbol,
        }
    }
}

/// Tokens, colors and symbols used to render the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptConfig {
    /// Opening token.
    pub prefix: &'static str,
    /// Closing token, written before the newline.
    pub suffix: &'static str,
    /// Token between the branch part and the file counts.
    pub separator: &'static str,
    /// Escape sequence closing every colored run.
    pub reset: String,
    /// Color of the branch label.
    pub branch_color: String,
    /// Commits on the upstream missing locally.
    pub behind: Segment,
    /// Local commits missing on the upstream.
    pub ahead: Segment,
    /// Files with index changes.
    pub staged: Segment,
    /// Files with merge conflicts.
    pub conflicts: Segment,
    /// Files with working tree changes.
    pub changed: Segment,
    /// New files not yet tracked.
    pub untracked: Segment,
    /// Shown alone when nothing is staged, conflicted, changed or untracked.
    pub clean: Segment,
}

impl PromptConfig {
    /// Build the configuration with the given escape wrapping.
    #[must_use]
    pub fn new(escape: EscapeStyle) -> Self {
        Self {
            prefix: "[",
            suffix: "]",
            separator: "|",
            reset: escape.reset(),
            branch_color: escape.bold(Color::Black),
            behind: Segment::new(escape, Color::Red, "<"),
            ahead: Segment::new(escape, Color::Cyan, ">"),
            staged: Segment::new(escape, Color::Yellow, "-"),
            conflicts: Segment::new(escape, Color::Red, "!"),
            changed: Segment::new(escape, Color::Blue, "+"),
            untracked: Segment::new(escape, Color::Magenta, "_"),
            clean: Segment::new(escape, Color::Green, "="),
        }
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self::new(EscapeStyle::default())
    }
}
