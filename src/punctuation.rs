//! Literal punctuation passes: dashes, ellipses, backtick quotes, and the
//! reverse "stupefy" pass.
//!
//! All of these are plain substring replacements.  Where two patterns share a
//! prefix the longer one is replaced first.

use crate::attributes::{BacktickMode, DashMode};
use crate::glyphs::Glyphs;

/// Replace every `pattern` with `replacement`, skipping the allocation-heavy
/// path when there is nothing to do.
fn replace_all(text: &str, pattern: &str, replacement: &str) -> String {
    if pattern.is_empty() || !text.contains(pattern) {
        return text.to_string();
    }
    text.replace(pattern, replacement)
}

/// Transform runs of hyphens into dashes according to `mode`.
pub fn educate_dashes(text: &str, mode: DashMode, glyphs: &Glyphs) -> String {
    match mode {
        DashMode::None => text.to_string(),
        DashMode::Simple => replace_all(text, "--", &glyphs.em_dash),
        DashMode::OldSchool => {
            let result = replace_all(text, "---", &glyphs.em_dash);
            replace_all(&result, "--", &glyphs.en_dash)
        }
        DashMode::OldSchoolInverted => {
            let result = replace_all(text, "---", &glyphs.en_dash);
            replace_all(&result, "--", &glyphs.em_dash)
        }
    }
}

/// Transform `...` and `. . .` into an ellipsis.
pub fn educate_ellipses(text: &str, glyphs: &Glyphs) -> String {
    let result = replace_all(text, "...", &glyphs.ellipsis);
    replace_all(&result, ". . .", &glyphs.ellipsis)
}

/// Transform ``` ``backtick'' ``` quotes, and with
/// [`BacktickMode::DoubleAndSingle`] every remaining `` ` `` and `'` too.
///
/// The single pass does no inference: every straight `'` left over becomes a
/// closing quote, so it has to run before the quote pass.
pub fn educate_backticks(text: &str, mode: BacktickMode, glyphs: &Glyphs) -> String {
    if mode == BacktickMode::None {
        return text.to_string();
    }

    let result = replace_all(text, "``", &glyphs.backtick_double_open);
    let result = replace_all(&result, "''", &glyphs.backtick_double_close);

    if mode == BacktickMode::DoubleAndSingle {
        let result = replace_all(&result, "`", &glyphs.backtick_single_open);
        replace_all(&result, "'", &glyphs.backtick_single_close)
    } else {
        result
    }
}

/// Turn smart punctuation back into its ASCII spelling.
///
/// En dashes become `-` and em dashes `--`, so the result is not always what
/// was originally typed.
pub fn stupefy(text: &str, glyphs: &Glyphs) -> String {
    let replacements = [
        (&glyphs.double_quote_open, "\""),
        (&glyphs.double_quote_close, "\""),
        (&glyphs.single_quote_open, "'"),
        (&glyphs.single_quote_close, "'"),
        (&glyphs.backtick_double_open, "\""),
        (&glyphs.backtick_double_close, "\""),
        (&glyphs.backtick_single_open, "'"),
        (&glyphs.backtick_single_close, "'"),
        (&glyphs.en_dash, "-"),
        (&glyphs.em_dash, "--"),
        (&glyphs.ellipsis, "..."),
    ];

    let mut result = text.to_string();
    for (glyph, ascii) in replacements {
        result = replace_all(&result, glyph, ascii);
    }
    result
}
