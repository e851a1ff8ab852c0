//! WASM-compatible wrapper for slide markup parsing.
//!
//! This crate exposes the parser and its export projections to
//! JavaScript for use in the browser editor and Cloudflare Workers.

use serde::{Deserialize, Serialize};
use slides_core::{
    render, DeckManifest, OutputFormat, RenderOptions, SlideDocument, SlideParser, SlideSummary,
    Theme,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Result of parsing markup.
#[derive(Debug, Serialize, Deserialize)]
pub struct ParseResult {
    /// Number of slides produced.
    pub slide_count: usize,
    /// The full slide document, for rendering.
    pub document: SlideDocument,
    /// Title and bullets per slide, for export and shared storage.
    pub summaries: Vec<SlideSummary>,
}

/// Parse slide markup.
///
/// # Arguments
/// * `text` - The raw markup from the editor
///
/// # Returns
/// A JavaScript object with the parse result.
#[wasm_bindgen]
pub fn parse_slides(text: &str) -> Result<JsValue, JsValue> {
    let result = parse_slides_impl(text);

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn parse_slides_impl(text: &str) -> ParseResult {
    let document = SlideParser::new().parse(text);
    let summaries = document.summaries();

    ParseResult {
        slide_count: document.len(),
        document,
        summaries,
    }
}

/// Build the export manifest for a deck.
///
/// # Arguments
/// * `text` - The raw markup
/// * `name` - Deck name; empty or missing uses the untitled name
/// * `theme` - Theme name; unknown names fall back to light
#[wasm_bindgen]
pub fn deck_manifest(text: &str, name: Option<String>, theme: &str) -> Result<JsValue, JsValue> {
    let manifest = deck_manifest_impl(text, name.as_deref(), theme);

    serde_wasm_bindgen::to_value(&manifest)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn deck_manifest_impl(text: &str, name: Option<&str>, theme: &str) -> DeckManifest {
    let document = SlideParser::new().parse(text);
    DeckManifest::from_document(&document, name, Theme::from_name(theme))
}

/// Format markup as a plain-text outline, optionally with a deck header.
#[wasm_bindgen]
pub fn format_outline(text: &str, theme: &str, header: bool) -> Result<String, JsValue> {
    format_outline_impl(text, theme, header).map_err(|e| JsValue::from_str(&e))
}

fn format_outline_impl(text: &str, theme: &str, header: bool) -> Result<String, String> {
    let document = SlideParser::new().parse(text);
    let options = RenderOptions {
        name: None,
        theme: Theme::from_name(theme),
        header,
    };

    render(&document, OutputFormat::Outline, &options).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use slides_core::SlideKind;

    #[test]
    fn test_parse_slides_impl() {
        let result = parse_slides_impl("# Intro\n- one\n\n::section\nNext");

        assert_eq!(result.slide_count, 2);
        assert_eq!(
            result.document.kinds(),
            vec![SlideKind::Bullets, SlideKind::Section]
        );
        assert_eq!(result.summaries[0].title, "Intro");
        assert_eq!(result.summaries[1].title, "Next");
    }

    #[test]
    fn test_deck_manifest_impl() {
        let manifest = deck_manifest_impl("A\n\nB\n- b", Some(""), "clean");

        assert_eq!(manifest.name, "untitled-deck");
        assert_eq!(manifest.theme, Theme::Clean);
        assert_eq!(manifest.slide_count, 2);
        assert_eq!(manifest.slides[1].bullet_count, 1);
    }

    #[test]
    fn test_format_outline_without_header() {
        let text = format_outline_impl("# A\n- x\n\n# B", "light", false).unwrap();
        assert_eq!(text, "A\n=\nx\n\nB\n=\n");
    }

    #[test]
    fn test_format_outline_empty() {
        assert_eq!(format_outline_impl("", "light", false).unwrap(), "");
    }
}
