//! The filter: resolved attributes, a glyph table, and the ordered list of
//! passes they select.

use log::{debug, trace, warn};

use crate::attributes::{self, Attributes, BacktickMode, DashMode};
use crate::escape;
use crate::glyphs::Glyphs;
use crate::punctuation;
use crate::quotes;

/// One pass of the pipeline.
///
/// Passes always run in declaration order; [`Filter::pipeline`] lists the
/// ones a given filter enables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Hide backslash escapes from every later pass.
    ShieldEscapes,
    /// Turn hyphen runs into dashes.
    Dashes(DashMode),
    /// Turn `...` and `. . .` into an ellipsis.
    Ellipses,
    /// Turn backtick quotes into curly quotes.
    Backticks(BacktickMode),
    /// Infer the direction of straight quotes.
    Quotes,
    /// Turn smart punctuation back into ASCII.
    Stupefy,
    /// Restore escaped characters, minus their backslash.
    UnshieldEscapes,
}

impl Step {
    /// Run this pass over `text`.
    pub fn apply(self, text: &str, glyphs: &Glyphs) -> String {
        match self {
            Step::ShieldEscapes => escape::shield(text),
            Step::Dashes(mode) => punctuation::educate_dashes(text, mode, glyphs),
            Step::Ellipses => punctuation::educate_ellipses(text, glyphs),
            Step::Backticks(mode) => punctuation::educate_backticks(text, mode, glyphs),
            Step::Quotes => quotes::educate_quotes(text, glyphs),
            Step::Stupefy => punctuation::stupefy(text, glyphs),
            Step::UnshieldEscapes => escape::unshield(text),
        }
    }
}

/// A configured punctuation filter.
///
/// A filter is immutable while educating, so one instance can be shared
/// freely between threads.
///
/// # Example
///
/// ```
/// use smartpunct::Filter;
///
/// let filter = Filter::default();
/// assert_eq!(filter.educate("Now -- and then"), "Now \u{2014} and then");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    attributes: Attributes,
    glyphs: Glyphs,
}

impl Default for Filter {
    fn default() -> Self {
        Self::new(attributes::DEFAULT)
    }
}

impl Filter {
    /// Create a filter from an attribute string such as `"1"` or `"qDe"`.
    ///
    /// Unrecognized characters are ignored, so this never fails.
    pub fn new(spec: &str) -> Self {
        let attributes = Attributes::parse(spec);
        debug!("Resolved attributes {:?} to {:?}", spec, attributes);
        Self::from_attributes(attributes)
    }

    /// Create a filter from already resolved attributes.
    pub fn from_attributes(attributes: Attributes) -> Self {
        if attributes.educates_and_stupefies() {
            warn!("Both educating and stupefying are enabled; stupefy runs last and undoes them");
        }
        Self {
            attributes,
            glyphs: Glyphs::default(),
        }
    }

    /// Replace the glyph table.
    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// The resolved attributes.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// The glyph table used for output.
    pub fn glyphs(&self) -> &Glyphs {
        &self.glyphs
    }

    /// Mutable access to the glyph table, for overriding single entries.
    pub fn glyphs_mut(&mut self) -> &mut Glyphs {
        &mut self.glyphs
    }

    /// The passes this filter runs, in order.
    ///
    /// Empty when the filter does nothing.
    pub fn pipeline(&self) -> Vec<Step> {
        let attrs = &self.attributes;
        if attrs.do_nothing {
            return Vec::new();
        }

        let mut steps = vec![Step::ShieldEscapes];
        if attrs.dashes != DashMode::None {
            steps.push(Step::Dashes(attrs.dashes));
        }
        if attrs.ellipses {
            steps.push(Step::Ellipses);
        }
        // Backticks consume `''`, so they must run before quotes.
        if attrs.backticks != BacktickMode::None {
            steps.push(Step::Backticks(attrs.backticks));
        }
        if attrs.quotes {
            steps.push(Step::Quotes);
        }
        if attrs.stupefy {
            steps.push(Step::Stupefy);
        }
        steps.push(Step::UnshieldEscapes);
        steps
    }

    /// Apply the filter to `input`, returning the transformed text.
    pub fn educate(&self, input: &str) -> String {
        let mut text = input.to_string();
        for step in self.pipeline() {
            trace!("Applying {:?}", step);
            text = step.apply(&text, &self.glyphs);
        }
        text
    }
}
