//! Per-line classification for standard slide bodies and columns.
//!
//! Body lines are matched against an ordered rule table; the first rule
//! that accepts a line decides what it becomes.

use crate::types::{Column, Paragraph, SlideBody};

/// What a single body line contributes to a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `## ` line, kept in paragraphs with heading style.
    Heading(&'a str),
    /// First `# ` line of the block.
    Title(&'a str),
    /// `> ` line, joined into the subtitle.
    Subtitle(&'a str),
    /// `- ` or `* ` line.
    Bullet(&'a str),
    /// Anything else.
    Paragraph(&'a str),
}

type LineRule = for<'a> fn(&'a str, &SlideBody) -> Option<LineKind<'a>>;

/// Rules in precedence order.
static LINE_RULES: [LineRule; 5] = [
    heading_rule,
    title_rule,
    subtitle_rule,
    bullet_rule,
    paragraph_rule,
];

fn strip_marker<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    line.strip_prefix(marker).map(str::trim_start)
}

/// Text of a `- ` or `* ` bullet line.
pub fn strip_bullet(line: &str) -> Option<&str> {
    strip_marker(line, "- ").or_else(|| strip_marker(line, "* "))
}

fn heading_rule<'a>(line: &'a str, _body: &SlideBody) -> Option<LineKind<'a>> {
    strip_marker(line, "## ").map(LineKind::Heading)
}

fn title_rule<'a>(line: &'a str, body: &SlideBody) -> Option<LineKind<'a>> {
    if body.title.is_some() {
        return None;
    }
    strip_marker(line, "# ").map(LineKind::Title)
}

fn subtitle_rule<'a>(line: &'a str, _body: &SlideBody) -> Option<LineKind<'a>> {
    strip_marker(line, "> ").map(LineKind::Subtitle)
}

fn bullet_rule<'a>(line: &'a str, _body: &SlideBody) -> Option<LineKind<'a>> {
    strip_bullet(line).map(LineKind::Bullet)
}

fn paragraph_rule<'a>(line: &'a str, _body: &SlideBody) -> Option<LineKind<'a>> {
    Some(LineKind::Paragraph(line))
}

/// Classify one line given the body built so far.
pub fn classify_line<'a>(line: &'a str, body: &SlideBody) -> LineKind<'a> {
    LINE_RULES
        .iter()
        .find_map(|rule| rule(line, body))
        .unwrap_or(LineKind::Paragraph(line))
}

fn apply_line(kind: LineKind<'_>, body: &mut SlideBody) {
    match kind {
        LineKind::Heading(text) => body.paragraphs.push(Paragraph::heading(text)),
        LineKind::Title(text) => body.title = Some(text.to_string()),
        LineKind::Subtitle(text) => body.push_subtitle(text),
        LineKind::Bullet(text) => body.bullets.push(text.to_string()),
        LineKind::Paragraph(text) => body.paragraphs.push(Paragraph::plain(text)),
    }
}

/// Classify and accumulate lines into `body`, then promote a title if none was given.
pub fn process_lines(lines: &[&str], body: &mut SlideBody) {
    for line in lines.iter().filter(|l| !l.trim().is_empty()) {
        let kind = classify_line(line, body);
        apply_line(kind, body);
    }
    body.promote_title();
}

/// Build one column: the first line is the title verbatim, the rest are
/// bullets or plain paragraphs.
pub fn build_column(lines: &[&str]) -> Column {
    let Some((first, rest)) = lines.split_first() else {
        return Column::default();
    };

    let mut column = Column {
        title: Some(first.to_string()),
        ..Default::default()
    };

    for line in rest {
        if let Some(text) = strip_bullet(line) {
            column.bullets.push(text.to_string());
        } else if !line.trim().is_empty() {
            column.paragraphs.push(line.to_string());
        }
    }

    column
}
