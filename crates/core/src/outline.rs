//! Plain-text outline output.
//!
//! Renders slide summaries as a text outline where each slide is its
//! title, an underline, and one line per bullet, separated by blank lines.

use crate::summary::{DeckManifest, SlideSummary};

/// Formatter for plain-text slide outlines.
#[derive(Debug, Clone)]
pub struct OutlineFormatter {
    /// Character repeated under each title.
    underline: char,

    /// Text placed before each bullet.
    bullet_prefix: String,

    /// Heading line for the deck header; no header when unset.
    header: Option<String>,
}

impl Default for OutlineFormatter {
    fn default() -> Self {
        Self {
            underline: '=',
            bullet_prefix: String::new(),
            header: None,
        }
    }
}

impl OutlineFormatter {
    /// Create a new formatter with `=` underlines and no header.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different underline character.
    pub fn with_underline(mut self, underline: char) -> Self {
        self.underline = underline;
        self
    }

    /// Prefix every bullet line, e.g. with `"- "`.
    pub fn with_bullet_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.bullet_prefix = prefix.into();
        self
    }

    /// Start the outline with a deck header.
    pub fn with_header(mut self, heading: impl Into<String>) -> Self {
        self.header = Some(heading.into());
        self
    }

    /// Format a single slide.
    ///
    /// # Example output
    /// ```text
    /// Agenda
    /// ======
    /// Intro
    /// Demo
    /// ```
    pub fn format_slide(&self, slide: &SlideSummary) -> String {
        let mut lines = Vec::with_capacity(slide.bullets.len() + 2);

        if !slide.title.is_empty() {
            lines.push(slide.title.clone());
            let width = slide.title.chars().count();
            lines.push(std::iter::repeat(self.underline).take(width).collect());
        }

        for bullet in &slide.bullets {
            lines.push(format!("{}{}", self.bullet_prefix, bullet));
        }

        lines.join("\n")
    }

    /// Format all slides, separated by blank lines. Slides with neither
    /// title nor bullets are skipped.
    pub fn format(&self, slides: &[SlideSummary]) -> String {
        slides
            .iter()
            .map(|s| self.format_slide(s))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Format a deck, including the header when one is configured.
    pub fn format_deck(&self, manifest: &DeckManifest, slides: &[SlideSummary]) -> String {
        let body = self.format(slides);

        match &self.header {
            Some(heading) => {
                let header = format!(
                    "{}\nTheme: {}\nSlides: {}",
                    heading,
                    manifest.theme.as_str(),
                    manifest.slide_count
                );
                if body.is_empty() {
                    header
                } else {
                    format!("{}\n\n{}", header, body)
                }
            }
            None => body,
        }
    }

    /// Format and add a trailing newline to non-empty output.
    pub fn format_with_newline(&self, manifest: &DeckManifest, slides: &[SlideSummary]) -> String {
        let formatted = self.format_deck(manifest, slides);
        if formatted.is_empty() {
            formatted
        } else {
            format!("{}\n", formatted)
        }
    }
}
