//! Prompt configuration for gitprompt.
//!
//! Everything the renderer emits that is not data lives here: the framing
//! tokens, the per-category symbols and the color escape sequences. The
//! configuration is built once at startup and handed to the renderer.
//!
//! # Example
//!
//! ```rust
//! use gitprompt_config::{EscapeStyle, PromptConfig};
//!
//! let config = PromptConfig::new(EscapeStyle::Raw);
//! assert_eq!(config.prefix, "[");
//! assert_eq!(config.reset, "\x1b[0m");
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod escape;
mod types;

pub use escape::EscapeStyle;
pub use types::{PromptConfig, Segment};
