//! Markup to slide document parsing.
//!
//! Blocks are split, each block is checked for a leading directive, and
//! either the directive's handler or the standard line processor builds
//! the slide. Parsing never fails.

use crate::blocks::{block_lines, split_blocks};
use crate::directive::{Directive, DirectiveHandler, DirectiveRegistry};
use crate::lines::process_lines;
use crate::types::{Slide, SlideBody, SlideContent, SlideDocument};

/// Parser for line-oriented slide markup.
#[derive(Debug, Clone, Default)]
pub struct SlideParser {
    directives: DirectiveRegistry,
}

impl SlideParser {
    /// Create a parser with the built-in directives.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an additional directive, or replace a built-in one.
    pub fn with_directive(mut self, name: impl Into<String>, handler: DirectiveHandler) -> Self {
        self.directives.register(name, handler);
        self
    }

    /// Parse markup into slides, one per non-empty block, in source order.
    pub fn parse(&self, text: &str) -> SlideDocument {
        let blocks = split_blocks(text);
        log::debug!("Split markup into {} blocks", blocks.len());

        let mut document = SlideDocument::new();
        for block in blocks {
            let content = self.build_content(&block);
            log::trace!("Block classified as {}", content.kind());
            document.add_slide(Slide::new(content, block));
        }

        document
    }

    /// Parse a single block of text into a slide.
    ///
    /// The block is expected to come from block splitting; blank lines inside
    /// it are ignored.
    pub fn parse_block(&self, block: &str) -> Slide {
        Slide::new(self.build_content(block), block)
    }

    fn build_content(&self, block: &str) -> SlideContent {
        let lines = block_lines(block);

        let Some(directive) = lines.first().and_then(|first| Directive::parse(first)) else {
            return standard_content(&lines);
        };

        let rest = &lines[1..];
        match self.directives.get(directive.name) {
            Some(handler) => handler(&directive, rest),
            None => {
                log::warn!(
                    "Unknown directive '::{}', treating block as a standard slide",
                    directive.name
                );
                standard_content(rest)
            }
        }
    }
}

/// Parse markup with the built-in directives.
pub fn parse_slides(text: &str) -> SlideDocument {
    SlideParser::new().parse(text)
}

fn standard_content(lines: &[&str]) -> SlideContent {
    let mut body = SlideBody::default();
    process_lines(lines, &mut body);
    classify_body(body)
}

/// Infer the kind of a standard slide from its populated body.
///
/// Bullets win; otherwise a subtitle or an empty paragraph list makes a
/// title slide; anything else is text.
pub fn classify_body(body: SlideBody) -> SlideContent {
    if !body.bullets.is_empty() {
        SlideContent::Bullets(body)
    } else if body.subtitle.is_some() || body.paragraphs.is_empty() {
        SlideContent::Title(body)
    } else {
        SlideContent::Text(body)
    }
}
