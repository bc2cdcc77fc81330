//! # Docstrings
//!
//! numpy-style docstrings parsed into blocks and printed as Markdown with
//! inline HTML, or as reStructuredText.
//!
//! ```text
//! Parameters      ← heading from the vocabulary
//! ----------      ← underline of three or more dashes
//! x : int         ← variable definition
//!     the value   ← indented description
//! ```
//!
//! ## Modules
//!
//! - **`types`**: `DocBlock` and `VarRecord`
//! - **`parser`**: `DocParser`, vocabulary-driven classification
//! - **`emphasis`**: `True`/`False`/`None` plus inline Markdown
//! - **`printers`**: `MarkdownPrinter` and `RstPrinter`

pub mod emphasis;
pub mod parser;
pub mod printers;
pub mod types;

pub use parser::DocParser;
pub use printers::{DocPrinter, MarkdownPrinter, RstPrinter};
pub use types::{DocBlock, VarRecord};

use crate::error::Result;

/// Parses a docstring with the default vocabulary and prints it as Markdown.
pub fn doc_as_md(doc: &str) -> Result<String> {
    let blocks = DocParser::default().parse(doc)?;
    Ok(MarkdownPrinter.print_blocks(&blocks))
}

/// Parses a docstring with the default vocabulary and prints it as RST.
pub fn doc_as_rst(doc: &str) -> Result<String> {
    let blocks = DocParser::default().parse(doc)?;
    Ok(RstPrinter.print_blocks(&blocks))
}
