//! ANSI color sequences and shell zero-width wrapping.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use colored::Color;

/// How escape sequences are marked as zero-width for the hosting shell.
///
/// Interactive shells count every byte of the prompt towards the cursor
/// column unless non-printing sequences are bracketed with the shell's
/// markers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EscapeStyle {
    /// zsh prompt expansion: `%{` ... `%}`.
    #[default]
    Zsh,
    /// bash `PS1`: `\[` ... `\]`.
    Bash,
    /// Plain ANSI with no markers.
    Raw,
}

impl EscapeStyle {
    /// Wrap an SGR parameter string (e.g. `31;1`) into a complete escape
    /// sequence for this shell.
    #[must_use]
    pub fn sgr(self, params: &str) -> String {
        match self {
            Self::Zsh => format!("%{{\x1b[{params}m%}}"),
            Self::Bash => format!("\\[\x1b[{params}m\\]"),
            Self::Raw => format!("\x1b[{params}m"),
        }
    }

    /// Bold foreground color.
    #[must_use]
    pub fn bold(self, color: Color) -> String {
        self.sgr(&format!("{};1", color.to_fg_str()))
    }

    /// Attribute reset.
    #[must_use]
    pub fn reset(self) -> String {
        self.sgr("0")
    }
}
