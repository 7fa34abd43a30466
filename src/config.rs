// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Configuration file support for smartpunct.
//!
//! This module provides functionality for loading and parsing configuration
//! files (`.smartpunct.toml`) that select the attribute string and override
//! output glyphs.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::attributes;
use crate::filter::Filter;
use crate::glyphs::Glyphs;

/// The default configuration file name.
pub const CONFIG_FILE_NAME: &str = ".smartpunct.toml";

/// Configuration for a smartpunct filter.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Attribute string, a preset or flags (default: `"1"`).
    pub attributes: String,

    /// Output glyph options.
    pub glyphs: GlyphConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            attributes: attributes::DEFAULT.to_string(),
            glyphs: GlyphConfig::default(),
        }
    }
}

/// Base table the glyph overrides apply to.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GlyphPreset {
    /// Literal Unicode punctuation (default).
    #[default]
    Unicode,
    /// Decimal HTML character references such as `&#8220;`.
    Html,
}

/// Glyph options.  Unset entries come from the preset.
///
/// Keys are snake_case in TOML; the camelCase spellings used by the
/// JavaScript bindings are accepted as aliases.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct GlyphConfig {
    /// Base table (default: `unicode`).
    pub preset: GlyphPreset,

    #[serde(alias = "doubleQuoteOpen")]
    pub double_quote_open: Option<String>,
    #[serde(alias = "doubleQuoteClose")]
    pub double_quote_close: Option<String>,
    #[serde(alias = "singleQuoteOpen")]
    pub single_quote_open: Option<String>,
    #[serde(alias = "singleQuoteClose")]
    pub single_quote_close: Option<String>,
    #[serde(alias = "backtickDoubleOpen")]
    pub backtick_double_open: Option<String>,
    #[serde(alias = "backtickDoubleClose")]
    pub backtick_double_close: Option<String>,
    #[serde(alias = "backtickSingleOpen")]
    pub backtick_single_open: Option<String>,
    #[serde(alias = "backtickSingleClose")]
    pub backtick_single_close: Option<String>,
    #[serde(alias = "emDash")]
    pub em_dash: Option<String>,
    #[serde(alias = "enDash")]
    pub en_dash: Option<String>,
    pub ellipsis: Option<String>,
}

impl GlyphConfig {
    /// Build the glyph table: the preset, then every override on top.
    pub fn to_glyphs(&self) -> Glyphs {
        let mut glyphs = match self.preset {
            GlyphPreset::Unicode => Glyphs::unicode(),
            GlyphPreset::Html => Glyphs::html_entities(),
        };

        let overrides = [
            (&self.double_quote_open, &mut glyphs.double_quote_open),
            (&self.double_quote_close, &mut glyphs.double_quote_close),
            (&self.single_quote_open, &mut glyphs.single_quote_open),
            (&self.single_quote_close, &mut glyphs.single_quote_close),
            (&self.backtick_double_open, &mut glyphs.backtick_double_open),
            (&self.backtick_double_close, &mut glyphs.backtick_double_close),
            (&self.backtick_single_open, &mut glyphs.backtick_single_open),
            (&self.backtick_single_close, &mut glyphs.backtick_single_close),
            (&self.em_dash, &mut glyphs.em_dash),
            (&self.en_dash, &mut glyphs.en_dash),
            (&self.ellipsis, &mut glyphs.ellipsis),
        ];
        for (value, slot) in overrides {
            if let Some(value) = value {
                *slot = value.clone();
            }
        }

        glyphs
    }
}

impl Config {
    /// Parse a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml(&content).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
    }

    /// Discover and load configuration by searching up the directory tree.
    ///
    /// Starting from `start_dir`, searches for `.smartpunct.toml` in each
    /// parent directory until the filesystem root is reached. Returns `None`
    /// if no configuration file is found.
    pub fn discover(start_dir: &Path) -> Result<Option<(PathBuf, Self)>, ConfigError> {
        let mut current = start_dir.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                log::debug!("Using configuration file {}", config_path.display());
                let config = Self::from_file(&config_path)?;
                return Ok(Some((config_path, config)));
            }
            if !current.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Build the filter this configuration describes.
    pub fn filter(&self) -> Filter {
        Filter::new(&self.attributes).with_glyphs(self.glyphs.to_glyphs())
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading the configuration file.
    Io(PathBuf, std::io::Error),
    /// Error parsing the TOML configuration.
    Parse(PathBuf, toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, err) => {
                write!(f, "failed to read {}: {}", path.display(), err)
            }
            ConfigError::Parse(path, err) => {
                write!(f, "failed to parse {}: {}", path.display(), err)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(_, err) => Some(err),
            ConfigError::Parse(_, err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.attributes, "1");
        assert_eq!(config.glyphs.preset, GlyphPreset::Unicode);
        assert_eq!(config.glyphs.to_glyphs(), Glyphs::unicode());
        assert_eq!(config.filter(), Filter::default());
    }

    #[test]
    fn test_parse_empty_toml() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_attributes() {
        let config = Config::from_toml(r#"attributes = "qDe""#).unwrap();
        assert_eq!(config.attributes, "qDe");
        let filter = config.filter();
        assert_eq!(filter.educate("1980--2000..."), "1980\u{2013}2000\u{2026}");
    }

    #[test]
    fn test_parse_html_preset() {
        let config = Config::from_toml(
            r#"
[glyphs]
preset = "html"
"#,
        )
        .unwrap();
        assert_eq!(config.glyphs.preset, GlyphPreset::Html);
        assert_eq!(config.glyphs.to_glyphs(), Glyphs::html_entities());
    }

    #[test]
    fn test_parse_glyph_overrides() {
        let config = Config::from_toml(
            r#"
[glyphs]
double_quote_open = "«"
double_quote_close = "»"
em_dash = " -- "
"#,
        )
        .unwrap();
        let glyphs = config.glyphs.to_glyphs();
        assert_eq!(glyphs.double_quote_open, "\u{ab}");
        assert_eq!(glyphs.double_quote_close, "\u{bb}");
        assert_eq!(glyphs.em_dash, " -- ");
        // Untouched entries keep the preset value.
        assert_eq!(glyphs.ellipsis, "\u{2026}");
    }

    #[test]
    fn test_overrides_apply_on_top_of_html_preset() {
        let config = Config::from_toml(
            r#"
[glyphs]
preset = "html"
ellipsis = "&hellip;"
"#,
        )
        .unwrap();
        let glyphs = config.glyphs.to_glyphs();
        assert_eq!(glyphs.ellipsis, "&hellip;");
        assert_eq!(glyphs.em_dash, "&#8212;");
    }

    #[test]
    fn test_parse_camel_case_glyph_keys() {
        let config = Config::from_toml(
            r#"
[glyphs]
emDash = "&mdash;"
doubleQuoteOpen = "<<"
"#,
        )
        .unwrap();
        assert_eq!(config.glyphs.em_dash.as_deref(), Some("&mdash;"));
        assert_eq!(config.glyphs.double_quote_open.as_deref(), Some("<<"));
    }

    #[test]
    fn test_parse_invalid_toml() {
        assert!(Config::from_toml("attributes = 1").is_err());
        assert!(Config::from_toml("[glyphs]\npreset = \"latex\"").is_err());
    }

    #[test]
    fn test_from_file_missing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = Config::from_file(&temp_dir.path().join(CONFIG_FILE_NAME));
        assert!(matches!(result, Err(ConfigError::Io(_, _))));
    }

    #[test]
    fn test_from_file_parse_error_mentions_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "attributes = [").unwrap();
        let err = Config::from_file(&config_path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_, _)));
        assert!(err.to_string().contains(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_discover_no_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        // Walking up may reach a real config outside the temp dir; only
        // assert that nothing inside it was picked up.
        if let Some((path, _)) = Config::discover(&nested).unwrap() {
            assert!(!path.starts_with(temp_dir.path()));
        }
    }

    #[test]
    fn test_discover_config_in_current_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, r#"attributes = "-1""#).unwrap();

        let (path, config) = Config::discover(temp_dir.path()).unwrap().unwrap();
        assert_eq!(path, config_path);
        assert_eq!(config.attributes, "-1");
    }

    #[test]
    fn test_discover_config_in_parent_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let sub_dir = temp_dir.path().join("subdir").join("nested");
        std::fs::create_dir_all(&sub_dir).unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, r#"attributes = "q""#).unwrap();

        let (path, config) = Config::discover(&sub_dir).unwrap().unwrap();
        assert_eq!(path, config_path);
        assert_eq!(config.attributes, "q");
    }
}
