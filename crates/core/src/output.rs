//! Output formats for a parsed deck.

use crate::error::{Error, Result};
use crate::outline::OutlineFormatter;
use crate::summary::{DeckManifest, Theme};
use crate::types::SlideDocument;
use serde::{Deserialize, Serialize};

/// Heading written at the top of outline exports.
pub const OUTLINE_HEADING: &str = "Quick Slides Export";

/// How a parsed deck is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full slide document as JSON.
    #[default]
    Json,
    /// Plain-text title/bullet outline.
    Outline,
    /// Deck manifest as JSON.
    Manifest,
    /// Title and bullet projection as JSON.
    Summary,
}

impl OutputFormat {
    /// Look up a format by name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "outline" | "text" | "txt" => Ok(Self::Outline),
            "manifest" => Ok(Self::Manifest),
            "summary" => Ok(Self::Summary),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }

    /// File extension for written output.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Outline => "txt",
            Self::Json | Self::Manifest | Self::Summary => "json",
        }
    }
}

/// Deck-level settings used when rendering.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Deck name; defaults to the untitled name.
    pub name: Option<String>,
    pub theme: Theme,
    /// Whether outline output starts with a deck header.
    pub header: bool,
}

/// Render `document` in `format`, with a trailing newline.
pub fn render(document: &SlideDocument, format: OutputFormat, options: &RenderOptions) -> Result<String> {
    let manifest = DeckManifest::from_document(document, options.name.as_deref(), options.theme);

    let mut output = match format {
        OutputFormat::Json => document.to_json()?,
        OutputFormat::Manifest => manifest.to_json()?,
        OutputFormat::Summary => serde_json::to_string_pretty(&document.summaries())?,
        OutputFormat::Outline => {
            let mut formatter = OutlineFormatter::new();
            if options.header {
                formatter = formatter.with_header(OUTLINE_HEADING);
            }
            return Ok(formatter.format_with_newline(&manifest, &document.summaries()));
        }
    };

    output.push('\n');
    Ok(output)
}
