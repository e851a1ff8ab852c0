//! Domain types for representing a parsed slide deck.

use serde::{Deserialize, Serialize};

/// The ordered slides produced by one parse of markup text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideDocument {
    /// Slides in presentation order (the order blocks appeared in the source).
    pub slides: Vec<Slide>,
}

impl SlideDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a slide.
    pub fn add_slide(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
        self.slides.iter()
    }

    /// Kinds of all slides, in order.
    pub fn kinds(&self) -> Vec<SlideKind> {
        self.slides.iter().map(Slide::kind).collect()
    }
}

impl<'a> IntoIterator for &'a SlideDocument {
    type Item = &'a Slide;
    type IntoIter = std::slice::Iter<'a, Slide>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}

/// A single slide together with the block text it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Kind-specific payload.
    #[serde(flatten)]
    pub content: SlideContent,

    /// Verbatim block text this slide was derived from.
    pub source_text: String,
}

impl Slide {
    /// Create a slide from its content and source block.
    pub fn new(content: SlideContent, source_text: impl Into<String>) -> Self {
        Self {
            content,
            source_text: source_text.into(),
        }
    }

    pub fn kind(&self) -> SlideKind {
        self.content.kind()
    }

    /// Slide title, if this kind of slide carries one and it was set.
    ///
    /// Section slides always report their title, even when empty.
    pub fn title(&self) -> Option<&str> {
        match &self.content {
            SlideContent::Section { title } => Some(title.as_str()),
            _ => self.body().and_then(|b| b.title.as_deref()),
        }
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.body().and_then(|b| b.subtitle.as_deref())
    }

    /// Bullet lines; empty for kinds without a body.
    pub fn bullets(&self) -> &[String] {
        self.body().map(|b| b.bullets.as_slice()).unwrap_or(&[])
    }

    /// Body paragraphs; empty for kinds without a body.
    pub fn paragraphs(&self) -> &[Paragraph] {
        self.body().map(|b| b.paragraphs.as_slice()).unwrap_or(&[])
    }

    /// Both columns of a two-column slide, otherwise empty.
    pub fn columns(&self) -> &[Column] {
        match &self.content {
            SlideContent::TwoColumn { columns } => columns.as_slice(),
            _ => &[],
        }
    }

    /// The shared title/subtitle/bullets/paragraphs body, for kinds that have one.
    pub fn body(&self) -> Option<&SlideBody> {
        match &self.content {
            SlideContent::Image { body, .. }
            | SlideContent::Bullets(body)
            | SlideContent::Title(body)
            | SlideContent::Text(body) => Some(body),
            SlideContent::Section { .. }
            | SlideContent::Quote { .. }
            | SlideContent::TwoColumn { .. } => None,
        }
    }
}

/// Kind-specific slide payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SlideContent {
    /// Section divider with a single heading line.
    Section { title: String },

    /// Pull quote with optional attribution.
    Quote {
        text: String,
        author: Option<String>,
    },

    /// Image slide; the reference is opaque and never fetched.
    Image {
        image_ref: String,
        #[serde(flatten)]
        body: SlideBody,
    },

    /// Two side-by-side columns. Always exactly two.
    TwoColumn { columns: [Column; 2] },

    /// Standard slide with at least one bullet.
    Bullets(SlideBody),

    /// Standard slide with a subtitle or nothing beyond its title.
    Title(SlideBody),

    /// Standard slide with body paragraphs and no bullets.
    Text(SlideBody),
}

impl SlideContent {
    pub fn kind(&self) -> SlideKind {
        match self {
            SlideContent::Section { .. } => SlideKind::Section,
            SlideContent::Quote { .. } => SlideKind::Quote,
            SlideContent::Image { .. } => SlideKind::Image,
            SlideContent::TwoColumn { .. } => SlideKind::TwoColumn,
            SlideContent::Bullets(_) => SlideKind::Bullets,
            SlideContent::Title(_) => SlideKind::Title,
            SlideContent::Text(_) => SlideKind::Text,
        }
    }
}

impl Default for SlideContent {
    /// An unclassified slide: text kind with every field empty.
    fn default() -> Self {
        SlideContent::Text(SlideBody::default())
    }
}

/// Discriminant of [`SlideContent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlideKind {
    Section,
    Quote,
    Image,
    TwoColumn,
    Bullets,
    Title,
    Text,
}

impl SlideKind {
    /// Name used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            SlideKind::Section => "section",
            SlideKind::Quote => "quote",
            SlideKind::Image => "image",
            SlideKind::TwoColumn => "two-column",
            SlideKind::Bullets => "bullets",
            SlideKind::Title => "title",
            SlideKind::Text => "text",
        }
    }
}

impl std::fmt::Display for SlideKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Title, subtitle, bullets and paragraphs shared by standard and image slides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideBody {
    pub title: Option<String>,

    /// All `> ` lines of the block, space-joined.
    pub subtitle: Option<String>,

    /// Bullet lines in source order.
    pub bullets: Vec<String>,

    /// Remaining lines in source order.
    pub paragraphs: Vec<Paragraph>,
}

impl SlideBody {
    /// Append subtitle text, joining with any earlier subtitle by a single space.
    pub fn push_subtitle(&mut self, text: &str) {
        match &mut self.subtitle {
            Some(existing) => {
                existing.push(' ');
                existing.push_str(text);
            }
            None => self.subtitle = Some(text.to_string()),
        }
    }

    /// Use the first paragraph as the title when no title line was given.
    pub fn promote_title(&mut self) {
        if self.title.is_none() && !self.paragraphs.is_empty() {
            let first = self.paragraphs.remove(0);
            self.title = Some(first.text);
        }
    }
}

/// A body line that is neither title, subtitle nor bullet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub style: ParagraphStyle,
    pub text: String,
}

impl Paragraph {
    pub fn heading(text: impl Into<String>) -> Self {
        Self {
            style: ParagraphStyle::Heading,
            text: text.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            style: ParagraphStyle::Paragraph,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParagraphStyle {
    Heading,
    Paragraph,
}

/// One half of a two-column slide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub title: Option<String>,
    pub bullets: Vec<String>,
    /// Plain lines; columns have no heading distinction.
    pub paragraphs: Vec<String>,
}

impl Column {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.bullets.is_empty() && self.paragraphs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_subtitle_joins_with_space() {
        let mut body = SlideBody::default();
        body.push_subtitle("first");
        body.push_subtitle("second");
        assert_eq!(body.subtitle.as_deref(), Some("first second"));
    }

    #[test]
    fn test_promote_title_takes_first_paragraph() {
        let mut body = SlideBody::default();
        body.paragraphs.push(Paragraph::heading("Heading"));
        body.paragraphs.push(Paragraph::plain("Body"));
        body.promote_title();

        assert_eq!(body.title.as_deref(), Some("Heading"));
        assert_eq!(body.paragraphs, vec![Paragraph::plain("Body")]);
    }

    #[test]
    fn test_promote_title_keeps_existing_title() {
        let mut body = SlideBody {
            title: Some("Kept".to_string()),
            ..Default::default()
        };
        body.paragraphs.push(Paragraph::plain("Body"));
        body.promote_title();

        assert_eq!(body.title.as_deref(), Some("Kept"));
        assert_eq!(body.paragraphs.len(), 1);
    }

    #[test]
    fn test_default_content_is_empty_text() {
        let slide = Slide::new(SlideContent::default(), "");
        assert_eq!(slide.kind(), SlideKind::Text);
        assert_eq!(slide.title(), None);
        assert!(slide.bullets().is_empty());
        assert!(slide.paragraphs().is_empty());
        assert!(slide.columns().is_empty());
    }

    #[test]
    fn test_accessors_on_bodiless_kinds() {
        let slide = Slide::new(
            SlideContent::Quote {
                text: "Hi".to_string(),
                author: None,
            },
            "::quote\nHi",
        );
        assert_eq!(slide.title(), None);
        assert_eq!(slide.subtitle(), None);
        assert!(slide.bullets().is_empty());
        assert!(slide.body().is_none());
    }

    #[test]
    fn test_serialized_kind_tag() {
        let slide = Slide::new(
            SlideContent::TwoColumn {
                columns: [Column::default(), Column::default()],
            },
            "::two-col",
        );
        let json = serde_json::to_value(&slide).unwrap();

        assert_eq!(json["kind"], "two-column");
        assert_eq!(json["columns"].as_array().unwrap().len(), 2);
        assert_eq!(json["source_text"], "::two-col");
    }

    #[test]
    fn test_serialized_image_flattens_body() {
        let slide = Slide::new(
            SlideContent::Image {
                image_ref: "cat.png".to_string(),
                body: SlideBody {
                    title: Some("Cat".to_string()),
                    ..Default::default()
                },
            },
            "::image cat.png\nCat",
        );
        let json = serde_json::to_value(&slide).unwrap();

        assert_eq!(json["kind"], "image");
        assert_eq!(json["image_ref"], "cat.png");
        assert_eq!(json["title"], "Cat");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(SlideKind::TwoColumn.as_str(), "two-column");
        assert_eq!(SlideKind::Bullets.to_string(), "bullets");
        assert_eq!(
            serde_json::to_value(SlideKind::TwoColumn).unwrap(),
            "two-column"
        );
    }
}
