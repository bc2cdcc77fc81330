//! # Markdown
//!
//! A small Markdown dialect converted paragraph by paragraph.
//!
//! Parsing happens in two steps. The text is first cut into paragraphs on
//! blank lines (fenced code stays whole), then each paragraph is classified
//! as a whole into one [`BlockKind`]. There is no inline tree: emphasis and
//! links are rewritten in place when a block renders.
//!
//! ## Modules
//!
//! - **`parser`**: `MarkdownParser` splits text into [`Block`]s
//! - **`classify`**: `ParagraphClassifier` picks the kind of a paragraph
//! - **`kinds`**: per-kind detection and HTML rendering
//! - **`emphasis`**: inline quote, code, bold/italic and link rewriting
//! - **`ids`**: GitHub-style heading anchors
//! - **`toc`**: table of contents for one document
//! - **`contents`**: contents and cross links for several documents

pub mod classify;
pub mod contents;
pub mod emphasis;
pub mod ids;
pub mod kinds;
pub mod parser;
pub mod toc;
pub mod types;

pub use contents::{Sources, make_mono_toc, make_multi_toc, resolve_link};
pub use parser::MarkdownParser;
pub use toc::TocMaker;
pub use types::{Block, BlockKind};

use crate::error::Result;
use crate::options::MarkdownOptions;
use serde::Serialize;

/// HTML of a Markdown document together with its table of contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocHtml {
    pub text: String,
    pub toc: String,
}

/// Converts Markdown text to HTML and builds a TOC from its headings.
///
/// Blocks are separated by a blank line in the output. The TOC is empty
/// when the text has no headings.
pub fn make_doc_html(text: &str, options: &MarkdownOptions) -> Result<DocHtml> {
    if text.is_empty() {
        return Ok(DocHtml::default());
    }

    let blocks = MarkdownParser::new().parse(text)?;
    log::debug!("converting {} markdown blocks", blocks.len());

    let headings: Vec<&str> = blocks
        .iter()
        .filter(|block| block.is_heading())
        .map(|block| block.text.as_str())
        .collect();
    let toc = TocMaker::new(options.html_indent).make_toc(&headings);

    let text = blocks
        .iter()
        .map(|block| block.make_html(options))
        .collect::<Vec<_>>()
        .join("\n\n");

    Ok(DocHtml { text, toc })
}
