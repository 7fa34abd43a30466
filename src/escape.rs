//! Backslash escapes that force a literal character.
//!
//! Before any transformation runs, each recognized escape is swapped for a
//! placeholder that no pass will touch; afterwards the placeholder becomes
//! the escaped character without its backslash.
//!
//! | Escape | Result |
//! |--------|--------|
//! | `\\`   | `\`    |
//! | `\"`   | `"`    |
//! | `\'`   | `'`    |
//! | `\.`   | `.`    |
//! | `\-`   | `-`    |
//! | `` \` `` | `` ` `` |

/// Escape sequence, placeholder, and the literal it restores to.
///
/// The backslash escape must come first so `\\"` shields the backslash and
/// leaves the quote to be educated.  Placeholders are wrapped in `%` so they
/// read as punctuation to the quote rules, and carry a private-use character
/// so ordinary text cannot contain them.
const ESCAPES: [(&str, &str, &str); 6] = [
    ("\\\\", "%%\u{E000}BACKSLASH\u{E000}%%", "\\"),
    ("\\\"", "%%\u{E000}DOUBLE_QUOTE\u{E000}%%", "\""),
    ("\\'", "%%\u{E000}SINGLE_QUOTE\u{E000}%%", "'"),
    ("\\.", "%%\u{E000}PERIOD\u{E000}%%", "."),
    ("\\-", "%%\u{E000}HYPHEN\u{E000}%%", "-"),
    ("\\`", "%%\u{E000}GRAVE_ACCENT\u{E000}%%", "`"),
];

/// Replace every recognized escape with its placeholder.
pub fn shield(text: &str) -> String {
    let mut result = text.to_string();
    for (escape, placeholder, _) in ESCAPES {
        if result.contains(escape) {
            result = result.replace(escape, placeholder);
        }
    }
    result
}

/// Replace every placeholder with the literal character it stands for.
pub fn unshield(text: &str) -> String {
    if !text.contains('\u{E000}') {
        return text.to_string();
    }
    let mut result = text.to_string();
    for (_, placeholder, literal) in ESCAPES {
        result = result.replace(placeholder, literal);
    }
    result
}
