//! Line-oriented slide markup parser, slide document types, and the
//! flattened projections used by export and persistence.

pub mod blocks;
pub mod directive;
pub mod error;
pub mod input;
pub mod lines;
pub mod outline;
pub mod output;
pub mod parser;
pub mod summary;
pub mod types;

pub use directive::{Directive, DirectiveHandler, DirectiveRegistry};
pub use error::{Error, Result};
pub use input::load_markup;
pub use outline::OutlineFormatter;
pub use output::{render, OutputFormat, RenderOptions};
pub use parser::{parse_slides, SlideParser};
pub use summary::{DeckManifest, ManifestEntry, SlideSummary, Theme};
pub use types::{
    Column, Paragraph, ParagraphStyle, Slide, SlideBody, SlideContent, SlideDocument, SlideKind,
};
