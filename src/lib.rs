//! Smartpunct turns plain ASCII punctuation into typographically correct
//! punctuation: curly quotes, en and em dashes, and ellipses.  It can also
//! "stupefy" smart punctuation back into ASCII.
//!
//! # Example
//!
//! ```
//! use smartpunct::{Filter, educate};
//!
//! assert_eq!(educate("I'm from the '80s", "1"), "I\u{2019}m from the \u{2019}80s");
//!
//! let filter = Filter::new("qD");
//! assert_eq!(filter.educate("1980--2000"), "1980\u{2013}2000");
//! ```
//!
//! Backslash escapes (`\\`, `\"`, `\'`, `\.`, `\-`, `` \` ``) keep a
//! character from being transformed; the backslash is dropped from the
//! output.

pub mod attributes;
pub mod config;
mod escape;
mod filter;
pub mod glyphs;
mod punctuation;
mod quotes;

#[cfg(feature = "wasm")]
mod wasm;

pub use attributes::{Attributes, BacktickMode, DashMode};
pub use config::{Config, ConfigError};
pub use filter::{Filter, Step};
pub use glyphs::Glyphs;

/// Educates `input` with a one-off filter built from `attributes`.
///
/// # Arguments
///
/// * `input` - The text to transform.
/// * `attributes` - An attribute string such as `"1"`, `"-1"`, or `"qDe"`.
///
/// # Returns
///
/// The transformed text.  This never fails.
pub fn educate(input: &str, attributes: &str) -> String {
    Filter::new(attributes).educate(input)
}
