//! The strings emitted for each kind of smart punctuation.

/// Left double quotation mark (U+201C)
pub const LEFT_DOUBLE_QUOTE: char = '\u{201C}';
/// Right double quotation mark (U+201D)
pub const RIGHT_DOUBLE_QUOTE: char = '\u{201D}';
/// Left single quotation mark (U+2018)
pub const LEFT_SINGLE_QUOTE: char = '\u{2018}';
/// Right single quotation mark (U+2019) - also used as curly apostrophe
pub const RIGHT_SINGLE_QUOTE: char = '\u{2019}';
/// Horizontal ellipsis (U+2026)
pub const ELLIPSIS: char = '\u{2026}';
/// En dash (U+2013)
pub const EN_DASH: char = '\u{2013}';
/// Em dash (U+2014)
pub const EM_DASH: char = '\u{2014}';

/// Output strings for every role a transformation can produce.
///
/// Each entry is an arbitrary string, so a caller that wants numeric
/// character references instead of raw Unicode can swap in
/// [`Glyphs::html_entities`] or override single entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyphs {
    /// Opening smart double quote.
    pub double_quote_open: String,
    /// Closing smart double quote.
    pub double_quote_close: String,
    /// Opening smart single quote.
    pub single_quote_open: String,
    /// Closing smart single quote, also the apostrophe.
    pub single_quote_close: String,
    /// Replacement for ``` `` ```.
    pub backtick_double_open: String,
    /// Replacement for `''`.
    pub backtick_double_close: String,
    /// Replacement for a lone `` ` ``.
    pub backtick_single_open: String,
    /// Replacement for a lone `'` in single backtick mode.
    pub backtick_single_close: String,
    /// Em dash.
    pub em_dash: String,
    /// En dash.
    pub en_dash: String,
    /// Ellipsis.
    pub ellipsis: String,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::unicode()
    }
}

impl Glyphs {
    /// Literal Unicode punctuation.
    pub fn unicode() -> Self {
        Self {
            double_quote_open: LEFT_DOUBLE_QUOTE.to_string(),
            double_quote_close: RIGHT_DOUBLE_QUOTE.to_string(),
            single_quote_open: LEFT_SINGLE_QUOTE.to_string(),
            single_quote_close: RIGHT_SINGLE_QUOTE.to_string(),
            backtick_double_open: LEFT_DOUBLE_QUOTE.to_string(),
            backtick_double_close: RIGHT_DOUBLE_QUOTE.to_string(),
            backtick_single_open: LEFT_SINGLE_QUOTE.to_string(),
            backtick_single_close: RIGHT_SINGLE_QUOTE.to_string(),
            em_dash: EM_DASH.to_string(),
            en_dash: EN_DASH.to_string(),
            ellipsis: ELLIPSIS.to_string(),
        }
    }

    /// Decimal HTML character references, e.g. `&#8220;`.
    pub fn html_entities() -> Self {
        Self {
            double_quote_open: "&#8220;".to_string(),
            double_quote_close: "&#8221;".to_string(),
            single_quote_open: "&#8216;".to_string(),
            single_quote_close: "&#8217;".to_string(),
            backtick_double_open: "&#8220;".to_string(),
            backtick_double_close: "&#8221;".to_string(),
            backtick_single_open: "&#8216;".to_string(),
            backtick_single_close: "&#8217;".to_string(),
            em_dash: "&#8212;".to_string(),
            en_dash: "&#8211;".to_string(),
            ellipsis: "&#8230;".to_string(),
        }
    }
}
