//! `::name argument` directives and their slide handlers.

use crate::lines::{build_column, process_lines};
use crate::types::{Column, SlideBody, SlideContent};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Regex for a directive line: two colons, a lowercase/hyphen name, optional argument.
static DIRECTIVE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^::([a-z-]+)(?:\s+(.*))?$").unwrap());

/// Line that separates the two halves of a `::two-col` block.
const COLUMN_SEPARATOR: &str = "|||";

/// Dashes that introduce a quote attribution.
const AUTHOR_DASHES: &[char] = &['\u{2014}', '\u{2013}', '-'];

/// Quotation marks stripped from either end of quote text.
const QUOTE_MARKS: &[char] = &['"', '\u{201C}', '\u{201D}'];

/// A parsed directive line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive<'a> {
    pub name: &'a str,
    /// Free-form argument; empty when none was given.
    pub argument: &'a str,
}

impl<'a> Directive<'a> {
    /// Parse a directive from a trimmed line.
    pub fn parse(line: &'a str) -> Option<Self> {
        let caps = DIRECTIVE_REGEX.captures(line)?;
        let name = caps.get(1)?.as_str();
        let argument = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");
        Some(Self { name, argument })
    }
}

/// Builds slide content from a directive and the block lines after it.
pub type DirectiveHandler = fn(&Directive<'_>, &[&str]) -> SlideContent;

/// Mapping from directive name to handler.
///
/// Names without a handler fall through to standard line processing.
#[derive(Debug, Clone)]
pub struct DirectiveRegistry {
    handlers: HashMap<String, DirectiveHandler>,
}

impl Default for DirectiveRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("section", section_slide);
        registry.register("quote", quote_slide);
        registry.register("image", image_slide);
        registry.register("two-col", two_column_slide);
        registry
    }
}

impl DirectiveRegistry {
    /// Registry with the built-in `section`, `quote`, `image` and `two-col` handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with no handlers at all.
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Add or replace the handler for `name`.
    pub fn register(&mut self, name: impl Into<String>, handler: DirectiveHandler) {
        self.handlers.insert(name.into(), handler);
    }

    pub fn get(&self, name: &str) -> Option<DirectiveHandler> {
        self.handlers.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }
}

/// `::section`: the first remaining line becomes the title.
pub fn section_slide(_directive: &Directive<'_>, lines: &[&str]) -> SlideContent {
    SlideContent::Section {
        title: lines.first().map(|l| l.to_string()).unwrap_or_default(),
    }
}

/// `::quote`: quote text with an optional dash-prefixed author line.
///
/// With no lines at all the slide stays an empty text slide.
pub fn quote_slide(_directive: &Directive<'_>, lines: &[&str]) -> SlideContent {
    if lines.is_empty() {
        return SlideContent::default();
    }

    let author_idx = lines.iter().position(|l| l.starts_with(AUTHOR_DASHES));
    let author = author_idx.map(|idx| {
        lines[idx]
            .trim_start_matches(AUTHOR_DASHES)
            .trim_start()
            .to_string()
    });

    let joined = lines
        .iter()
        .enumerate()
        .filter(|(idx, _)| Some(*idx) != author_idx)
        .map(|(_, line)| *line)
        .collect::<Vec<_>>()
        .join(" ");

    SlideContent::Quote {
        text: strip_quote_marks(&joined).to_string(),
        author,
    }
}

/// Remove at most one quotation mark from each end.
fn strip_quote_marks(text: &str) -> &str {
    let text = text.strip_prefix(QUOTE_MARKS).unwrap_or(text);
    text.strip_suffix(QUOTE_MARKS).unwrap_or(text)
}

/// `::image <ref>`: the argument is the image reference; the rest is a standard body.
pub fn image_slide(directive: &Directive<'_>, lines: &[&str]) -> SlideContent {
    let mut body = SlideBody::default();
    process_lines(lines, &mut body);

    SlideContent::Image {
        image_ref: directive.argument.to_string(),
        body,
    }
}

/// `::two-col`: lines split on `|||` into exactly two columns.
pub fn two_column_slide(_directive: &Directive<'_>, lines: &[&str]) -> SlideContent {
    let mut segments: Vec<Vec<&str>> = vec![Vec::new()];
    for line in lines {
        if *line == COLUMN_SEPARATOR {
            segments.push(Vec::new());
        } else if let Some(current) = segments.last_mut() {
            current.push(*line);
        }
    }

    if segments.len() > 2 {
        log::warn!(
            "two-col block has {} segments; only the first two are kept",
            segments.len()
        );
    }

    let mut segments = segments.into_iter();
    let left = segments.next().unwrap_or_default();
    let right = segments.next().unwrap_or_default();
    let columns: [Column; 2] = [build_column(&left), build_column(&right)];

    SlideContent::TwoColumn { columns }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SlideKind;

    fn directive(name: &str) -> Directive<'_> {
        Directive { name, argument: "" }
    }

    #[test]
    fn test_parse_directive() {
        assert_eq!(
            Directive::parse("::image https://example.com/a.png"),
            Some(Directive {
                name: "image",
                argument: "https://example.com/a.png"
            })
        );
        assert_eq!(Directive::parse("::two-col"), Some(directive("two-col")));
        assert_eq!(
            Directive::parse("::image    spaced"),
            Some(Directive {
                name: "image",
                argument: "spaced"
            })
        );
    }

    #[test]
    fn test_parse_rejects_non_directives() {
        assert_eq!(Directive::parse("::Section"), None);
        assert_eq!(Directive::parse(":section"), None);
        assert_eq!(Directive::parse("::"), None);
        assert_eq!(Directive::parse("::quote:"), None);
        assert_eq!(Directive::parse("text ::section"), None);
    }

    #[test]
    fn test_registry_builtins() {
        let registry = DirectiveRegistry::new();
        for name in ["section", "quote", "image", "two-col"] {
            assert!(registry.contains(name), "missing {name}");
        }
        assert!(!registry.contains("video"));
        assert!(DirectiveRegistry::empty().get("section").is_none());
    }

    #[test]
    fn test_section_slide() {
        let content = section_slide(&directive("section"), &["Part Two", "ignored"]);
        assert_eq!(
            content,
            SlideContent::Section {
                title: "Part Two".to_string()
            }
        );

        let empty = section_slide(&directive("section"), &[]);
        assert_eq!(
            empty,
            SlideContent::Section {
                title: String::new()
            }
        );
    }

    #[test]
    fn test_quote_with_author() {
        let content = quote_slide(
            &directive("quote"),
            &["\"Great things", "happen.\"", "\u{2014} Ada Lovelace"],
        );
        assert_eq!(
            content,
            SlideContent::Quote {
                text: "Great things happen.".to_string(),
                author: Some("Ada Lovelace".to_string()),
            }
        );
    }

    #[test]
    fn test_quote_author_line_anywhere() {
        let content = quote_slide(&directive("quote"), &["- Someone", "Words"]);
        assert_eq!(
            content,
            SlideContent::Quote {
                text: "Words".to_string(),
                author: Some("Someone".to_string()),
            }
        );
    }

    #[test]
    fn test_quote_without_author() {
        let content = quote_slide(&directive("quote"), &["Just words"]);
        assert_eq!(
            content,
            SlideContent::Quote {
                text: "Just words".to_string(),
                author: None,
            }
        );
    }

    #[test]
    fn test_quote_strips_single_mark_only() {
        assert_eq!(strip_quote_marks("\"\"x\"\""), "\"x\"");
        assert_eq!(strip_quote_marks("\u{201C}x\u{201D}"), "x");
        assert_eq!(strip_quote_marks("x"), "x");
    }

    #[test]
    fn test_empty_quote_is_default_text() {
        let content = quote_slide(&directive("quote"), &[]);
        assert_eq!(content.kind(), SlideKind::Text);
        assert_eq!(content, SlideContent::default());
    }

    #[test]
    fn test_image_slide_uses_standard_body() {
        let dir = Directive {
            name: "image",
            argument: "cat.png",
        };
        let content = image_slide(&dir, &["A cat", "- fluffy"]);
        match content {
            SlideContent::Image { image_ref, body } => {
                assert_eq!(image_ref, "cat.png");
                assert_eq!(body.title.as_deref(), Some("A cat"));
                assert_eq!(body.bullets, vec!["fluffy"]);
                assert!(body.paragraphs.is_empty());
            }
            other => panic!("expected image, got {other:?}"),
        }
    }

    #[test]
    fn test_image_slide_without_lines() {
        let content = image_slide(&directive("image"), &[]);
        assert_eq!(
            content,
            SlideContent::Image {
                image_ref: String::new(),
                body: SlideBody::default(),
            }
        );
    }

    #[test]
    fn test_two_columns_always_two() {
        for lines in [
            vec!["Only"],
            vec!["L", "|||", "R"],
            vec!["A", "|||", "B", "|||", "C", "|||", "D"],
            vec![],
        ] {
            let content = two_column_slide(&directive("two-col"), &lines);
            match content {
                SlideContent::TwoColumn { columns } => assert_eq!(columns.len(), 2),
                other => panic!("expected two-column, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_two_columns_drop_extra_segments() {
        let content = two_column_slide(
            &directive("two-col"),
            &["A", "|||", "B", "- b", "|||", "C"],
        );
        let SlideContent::TwoColumn { columns } = content else {
            panic!("expected two-column");
        };
        assert_eq!(columns[0].title.as_deref(), Some("A"));
        assert_eq!(columns[1].title.as_deref(), Some("B"));
        assert_eq!(columns[1].bullets, vec!["b"]);
    }

    #[test]
    fn test_two_columns_pad_missing_column() {
        let content = two_column_slide(&directive("two-col"), &["Left", "- a"]);
        let SlideContent::TwoColumn { columns } = content else {
            panic!("expected two-column");
        };
        assert_eq!(columns[0].bullets, vec!["a"]);
        assert!(columns[1].is_empty());
    }
}
