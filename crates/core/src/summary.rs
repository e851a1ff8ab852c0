//! Flattened projections of a slide document for export and persistence.
//!
//! Export and legacy storage only understand a title and a list of
//! bullets per slide; the manifest adds the deck-level metadata they
//! attach to it.

use crate::error::Result;
use crate::types::{Slide, SlideDocument, SlideKind};
use serde::{Deserialize, Serialize};

/// Name used for decks saved without one.
pub const DEFAULT_DECK_NAME: &str = "untitled-deck";

/// Title and bullet text of one slide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideSummary {
    pub title: String,
    pub bullets: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&Slide> for SlideSummary {
    fn from(slide: &Slide) -> Self {
        Self {
            title: slide.title().unwrap_or_default().to_string(),
            bullets: slide.bullets().to_vec(),
            notes: None,
        }
    }
}

impl SlideDocument {
    /// Title and bullets of every slide, in order.
    pub fn summaries(&self) -> Vec<SlideSummary> {
        self.slides.iter().map(SlideSummary::from).collect()
    }

    /// Serialize the full document as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Presentation color themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Contrast,
    Clean,
}

impl Theme {
    /// Look up a theme by name, falling back to [`Theme::Light`] for unknown names.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "dark" => Self::Dark,
            "contrast" => Self::Contrast,
            "clean" => Self::Clean,
            _ => Self::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Contrast => "contrast",
            Self::Clean => "clean",
        }
    }
}

/// Deck-level description handed to export pipelines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckManifest {
    pub name: String,
    pub theme: Theme,
    pub slide_count: usize,
    pub slides: Vec<ManifestEntry>,
}

/// One slide in a [`DeckManifest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// 0-based position in the deck.
    pub index: usize,
    pub kind: SlideKind,
    pub title: String,
    pub bullet_count: usize,
}

impl DeckManifest {
    /// Build a manifest for `document`. An empty or missing name becomes
    /// [`DEFAULT_DECK_NAME`].
    pub fn from_document(document: &SlideDocument, name: Option<&str>, theme: Theme) -> Self {
        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_DECK_NAME)
            .to_string();

        let slides = document
            .iter()
            .enumerate()
            .map(|(index, slide)| ManifestEntry {
                index,
                kind: slide.kind(),
                title: slide.title().unwrap_or_default().to_string(),
                bullet_count: slide.bullets().len(),
            })
            .collect();

        Self {
            name,
            theme,
            slide_count: document.len(),
            slides,
        }
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
