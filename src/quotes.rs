//! Direction inference for straight quotes.
//!
//! Each straight `'` and `"` is classified as opening or closing from the
//! characters around it.  The rules run in a fixed order, each one a global,
//! non-overlapping substitution over the output of the previous one, so a
//! quote consumed by an early rule is invisible to the later ones:
//!
//!  1. A quote that starts the text and is followed by punctuation that is
//!     not followed by a word boundary closes.
//!  2. `"'` or `'"` before a word character opens both quotes.
//!  3. `'` before two digits and an `s` (`'80s`) is an apostrophe.
//!  4. `'` after whitespace or a dash and before a word character opens.
//!  5. `'` after an ordinary character closes, as does a `'` followed by
//!     whitespace or by an `s` that ends a word.
//!  6. Any other `'` opens.
//!  7. to 9. Rules 4 to 6 again for `"`, without the `s` case.
//!
//! The heuristic is intentionally simple; quotes used as foot and inch marks,
//! for instance, come out wrong.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::glyphs::{EM_DASH, EN_DASH, Glyphs};

/// Punctuation that may follow a quote at the very start of the text.
const PUNCTUATION: &str = r##"[!"#$%'()*+,\-./:;<=>?@\[\\\]^_`{|}~]"##;

static LEADING_SINGLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^'({PUNCTUATION})\B")).unwrap());
static LEADING_DOUBLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r#"^"({PUNCTUATION})\B"#)).unwrap());

static NESTED_DOUBLE_SINGLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""'(\w)"#).unwrap());
static NESTED_SINGLE_DOUBLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"'"(\w)"#).unwrap());

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\w").unwrap());

static DECADE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"'(\d{2}s)").unwrap());

static OPENING_SINGLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(\s|--|{EN_DASH}|{EM_DASH})'(\w)")).unwrap()
});
static OPENING_DOUBLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r#"(\s|--|{EN_DASH}|{EM_DASH})"(\w)"#)).unwrap()
});

/// Transform every straight quote in `text` into a curly one.
pub fn educate_quotes(text: &str, glyphs: &Glyphs) -> String {
    if !text.contains(['\'', '"']) {
        return text.to_string();
    }

    let sq_open = glyphs.single_quote_open.as_str();
    let sq_close = glyphs.single_quote_close.as_str();
    let dq_open = glyphs.double_quote_open.as_str();
    let dq_close = glyphs.double_quote_close.as_str();

    // Quote at the very start followed by punctuation: close it.
    let result = LEADING_SINGLE.replace(text, |caps: &Captures| {
        format!("{sq_close}{}", &caps[1])
    });
    let result = LEADING_DOUBLE.replace(&result, |caps: &Captures| {
        format!("{dq_close}{}", &caps[1])
    });

    // Nested quotes such as "'Quoted' words in a larger quote."
    let result = NESTED_DOUBLE_SINGLE.replace_all(&result, |caps: &Captures| {
        format!("{dq_open}{sq_open}{}", &caps[1])
    });
    let result = NESTED_SINGLE_DOUBLE.replace_all(&result, |caps: &Captures| {
        format!("{sq_open}{dq_open}{}", &caps[1])
    });

    // Decade abbreviations: the '80s.
    let result = DECADE.replace_all(&result, |caps: &Captures| {
        format!("{sq_close}{}", &caps[1])
    });

    let result = educate_kind(&result, '\'', &OPENING_SINGLE, sq_open, sq_close, true);
    educate_kind(&result, '"', &OPENING_DOUBLE, dq_open, dq_close, false)
}

/// Apply the opening, closing, and fallback rules for one kind of quote.
fn educate_kind(
    text: &str,
    quote: char,
    opening: &Regex,
    open: &str,
    close: &str,
    closes_before_s: bool,
) -> String {
    if !text.contains(quote) {
        return text.to_string();
    }

    let result = opening.replace_all(text, |caps: &Captures| {
        format!("{}{open}{}", &caps[1], &caps[2])
    });
    let result = educate_closing(&result, quote, close, closes_before_s);

    // Anything left is assumed to open.
    result.replace(quote, open)
}

/// Replace closing quotes of the given kind.
///
/// This scans the text the way a leftmost, non-overlapping regex match of
/// `([^ \t\r\n\[{(\-])?'` would, where the quote closes if the optional
/// character matched, and otherwise only if whitespace (or, with
/// `closes_before_s`, an `s` or `S` ending a word) follows.  The character
/// before the quote is consumed along with it; the one after is not.
fn educate_closing(text: &str, quote: char, close: &str, closes_before_s: bool) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        // Quote glued to the end of an ordinary character.
        if i + 1 < chars.len() && chars[i + 1] == quote && !is_opening_context(ch) {
            result.push(ch);
            result.push_str(close);
            i += 2;
            continue;
        }

        if ch == quote && closes_by_lookahead(&chars, i, closes_before_s) {
            result.push_str(close);
        } else {
            result.push(ch);
        }
        i += 1;
    }

    result
}

/// Characters after which a quote is not considered closing.
fn is_opening_context(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '[' | '{' | '(' | '-')
}

/// Whether the quote at `i` is followed by whitespace or, optionally, by an
/// `s` at the end of a word (`the Joneses' house`, `'s`).
fn closes_by_lookahead(chars: &[char], i: usize, closes_before_s: bool) -> bool {
    match chars.get(i + 1) {
        Some(c) if c.is_whitespace() => true,
        Some('s' | 'S') if closes_before_s => {
            !chars.get(i + 2).is_some_and(|&c| is_word_char(c))
        }
        _ => false,
    }
}

/// Whether `c` is a `\w` character, combining marks and connectors included.
fn is_word_char(c: char) -> bool {
    let mut buf = [0; 4];
    WORD.is_match(c.encode_utf8(&mut buf))
}
