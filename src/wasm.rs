//! WebAssembly bindings for smartpunct.
//!
//! This module provides JavaScript-friendly bindings for the filter.

use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::attributes;
use crate::config::{GlyphConfig, GlyphPreset};
use crate::filter::Filter;

/// JavaScript-friendly options struct.
///
/// All fields are optional and use camelCase naming for JavaScript conventions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JsOptions {
    /// Attribute string: a preset or flags (default: "1").
    pub attributes: Option<String>,

    /// Emit HTML character references instead of Unicode (default: false).
    pub html_entities: Option<bool>,

    /// Per-glyph overrides such as `emDash` or `doubleQuoteOpen`.
    #[serde(flatten)]
    pub glyphs: GlyphConfig,
}

impl JsOptions {
    /// Convert JavaScript options to a filter.
    fn to_filter(&self) -> Filter {
        let spec = self.attributes.as_deref().unwrap_or(attributes::DEFAULT);
        let mut glyphs = self.glyphs.clone();
        if self.html_entities == Some(true) {
            glyphs.preset = GlyphPreset::Html;
        }

        Filter::new(spec).with_glyphs(glyphs.to_glyphs())
    }
}

/// Educate punctuation in `input`.
///
/// # Arguments
///
/// * `input` - Text to transform
/// * `options` - Optional options as a JavaScript object
///
/// # Returns
///
/// The transformed string.
#[wasm_bindgen]
pub fn educate(input: &str, options: JsValue) -> Result<String, JsError> {
    let js_opts: JsOptions = if options.is_undefined() || options.is_null() {
        JsOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options).map_err(|e| JsError::new(&e.to_string()))?
    };

    Ok(js_opts.to_filter().educate(input))
}

/// Turn smart punctuation in `input` back into ASCII.
#[wasm_bindgen]
pub fn stupefy(input: &str) -> String {
    Filter::new(attributes::STUPEFY).educate(input)
}
