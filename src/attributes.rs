//! Attribute strings that select which transformations to apply.
//!
//! An attribute string is either one of the numeric presets (`"0"`, `"1"`,
//! `"2"`, `"3"`, `"-1"`) or a sequence of single-character flags:
//!
//! | Flag | Effect                                             |
//! |------|----------------------------------------------------|
//! | `q`  | educate straight quotes                            |
//! | `b`  | educate ``` ``double'' ``` backtick quotes         |
//! | `B`  | educate ``` ``double'' ``` and `` `single' `` ones |
//! | `d`  | `--` becomes an em dash                            |
//! | `D`  | old-school dashes: `---` em, `--` en               |
//! | `i`  | inverted old-school dashes: `---` en, `--` em      |
//! | `e`  | `...` becomes an ellipsis                          |
//!
//! Unknown characters are ignored, and a later flag overrides an earlier one
//! for the same setting.

/// Preset that disables every transformation.
pub const DO_NOTHING: &str = "0";
/// Preset: `--` for em dashes, no en dash support.
pub const EM_DASH: &str = "1";
/// Preset: `---` for em dashes, `--` for en dashes.
pub const LONG_EM_DASH_SHORT_EN: &str = "2";
/// Preset: `--` for em dashes, `---` for en dashes.
pub const SHORT_EM_DASH_LONG_EN: &str = "3";
/// Preset that only turns smart punctuation back into ASCII.
pub const STUPEFY: &str = "-1";
/// The preset used when no attribute string is given.
pub const DEFAULT: &str = EM_DASH;

/// How runs of hyphens are turned into dashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashMode {
    /// Leave hyphens alone.
    #[default]
    None,
    /// `--` becomes an em dash.
    Simple,
    /// `---` becomes an em dash and `--` an en dash.
    OldSchool,
    /// `---` becomes an en dash and `--` an em dash.
    OldSchoolInverted,
}

/// Which backtick quote conventions are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BacktickMode {
    /// Backticks are left alone.
    #[default]
    None,
    /// Only ``` ``double'' ``` quotes.
    DoubleOnly,
    /// ``` ``double'' ``` quotes, then every remaining `` ` `` and `'`.
    DoubleAndSingle,
}

/// The resolved set of toggles for one filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Attributes {
    /// Return the input untouched; overrides everything else.
    pub do_nothing: bool,
    /// Infer the direction of straight `'` and `"` quotes.
    pub quotes: bool,
    /// Backtick quote handling.
    pub backticks: BacktickMode,
    /// Dash handling.
    pub dashes: DashMode,
    /// Turn `...` and `. . .` into an ellipsis.
    pub ellipses: bool,
    /// Turn smart punctuation back into ASCII.
    pub stupefy: bool,
}

impl Attributes {
    /// Resolve an attribute string into toggles.
    ///
    /// This never fails: characters that are not flags are skipped.
    pub fn parse(spec: &str) -> Self {
        match spec {
            DO_NOTHING => Self {
                do_nothing: true,
                ..Self::default()
            },
            EM_DASH => Self::everything(DashMode::Simple),
            LONG_EM_DASH_SHORT_EN => Self::everything(DashMode::OldSchool),
            SHORT_EM_DASH_LONG_EN => Self::everything(DashMode::OldSchoolInverted),
            STUPEFY => Self {
                stupefy: true,
                ..Self::default()
            },
            flags => {
                let mut attrs = Self::default();
                for c in flags.chars() {
                    match c {
                        'q' => attrs.quotes = true,
                        'b' => attrs.backticks = BacktickMode::DoubleOnly,
                        'B' => attrs.backticks = BacktickMode::DoubleAndSingle,
                        'd' => attrs.dashes = DashMode::Simple,
                        'D' => attrs.dashes = DashMode::OldSchool,
                        'i' => attrs.dashes = DashMode::OldSchoolInverted,
                        'e' => attrs.ellipses = true,
                        _ => {}
                    }
                }
                attrs
            }
        }
    }

    /// Quotes, double backticks, and ellipses, with the given dash mode.
    fn everything(dashes: DashMode) -> Self {
        Self {
            quotes: true,
            backticks: BacktickMode::DoubleOnly,
            dashes,
            ellipses: true,
            ..Self::default()
        }
    }

    /// Whether both an educating pass and the stupefy pass are enabled.
    ///
    /// The presets never produce this, but hand-built attributes can; the
    /// stupefy pass then undoes whatever the earlier passes produced.
    pub fn educates_and_stupefies(&self) -> bool {
        self.stupefy
            && (self.quotes
                || self.ellipses
                || self.backticks != BacktickMode::None
                || self.dashes != DashMode::None)
    }
}

impl From<&str> for Attributes {
    fn from(spec: &str) -> Self {
        Self::parse(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_do_nothing() {
        let attrs = Attributes::parse("0");
        assert!(attrs.do_nothing);
        assert!(!attrs.quotes);
        assert_eq!(attrs.dashes, DashMode::None);
    }

    #[test]
    fn test_preset_default_is_em_dash() {
        assert_eq!(Attributes::parse(DEFAULT), Attributes::parse("1"));
        let attrs = Attributes::parse("1");
        assert!(attrs.quotes);
        assert!(attrs.ellipses);
        assert_eq!(attrs.backticks, BacktickMode::DoubleOnly);
        assert_eq!(attrs.dashes, DashMode::Simple);
        assert!(!attrs.stupefy);
        assert!(!attrs.do_nothing);
    }

    #[test]
    fn test_preset_old_school_dashes() {
        assert_eq!(Attributes::parse("2").dashes, DashMode::OldSchool);
        assert_eq!(Attributes::parse("3").dashes, DashMode::OldSchoolInverted);
    }

    #[test]
    fn test_preset_stupefy() {
        let attrs = Attributes::parse("-1");
        assert!(attrs.stupefy);
        assert!(!attrs.quotes);
        assert_eq!(attrs.backticks, BacktickMode::None);
        assert!(!attrs.educates_and_stupefies());
    }

    #[test]
    fn test_flags() {
        let attrs = Attributes::parse("qBie");
        assert!(attrs.quotes);
        assert_eq!(attrs.backticks, BacktickMode::DoubleAndSingle);
        assert_eq!(attrs.dashes, DashMode::OldSchoolInverted);
        assert!(attrs.ellipses);
        assert!(!attrs.stupefy);
    }

    #[test]
    fn test_last_flag_wins() {
        assert_eq!(Attributes::parse("dD").dashes, DashMode::OldSchool);
        assert_eq!(Attributes::parse("Dd").dashes, DashMode::Simple);
        assert_eq!(Attributes::parse("Bb").backticks, BacktickMode::DoubleOnly);
    }

    #[test]
    fn test_unknown_flags_ignored() {
        let attrs = Attributes::parse("xq!z");
        assert_eq!(
            attrs,
            Attributes {
                quotes: true,
                ..Attributes::default()
            }
        );
    }

    #[test]
    fn test_empty_spec_enables_nothing() {
        let attrs = Attributes::parse("");
        assert_eq!(attrs, Attributes::default());
        assert!(!attrs.do_nothing);
    }

    #[test]
    fn test_presets_only_match_whole_spec() {
        // "10" is not a preset; neither character is a flag.
        assert_eq!(Attributes::parse("10"), Attributes::default());
    }

    #[test]
    fn test_educates_and_stupefies() {
        let attrs = Attributes {
            dashes: DashMode::Simple,
            stupefy: true,
            ..Attributes::default()
        };
        assert!(attrs.educates_and_stupefies());
    }
}
