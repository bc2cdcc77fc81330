use super::kinds::{CodeFence, Heading, List, Paragraph, Rule, Table};
use crate::options::MarkdownOptions;
use serde::Serialize;

/// The kind of a Markdown block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BlockKind {
    /// A single `#`-prefixed line.
    Heading,
    /// A single line of three or more `-`, `=` or `*`.
    HorizontalRule,
    /// Anything no other kind claims, raw HTML included.
    Paragraph,
    /// A paragraph opening with `- `.
    List,
    /// Pipe-separated rows with an underline after the header row.
    Table,
    /// A fenced block, blank lines included.
    Code,
}

/// One parsed paragraph of Markdown source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub kind: BlockKind,
    /// Source text, trimmed.
    pub text: String,
}

impl Block {
    pub fn new(kind: BlockKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn is_heading(&self) -> bool {
        self.kind == BlockKind::Heading
    }

    pub fn is_list(&self) -> bool {
        self.kind == BlockKind::List
    }

    pub fn make_html(&self, options: &MarkdownOptions) -> String {
        match self.kind {
            BlockKind::Heading => Heading::to_html(&self.text, options),
            BlockKind::HorizontalRule => Rule::HTML.to_string(),
            BlockKind::Paragraph => Paragraph::to_html(&self.text),
            BlockKind::List => List::to_html(&self.text, options),
            BlockKind::Table => Table::to_html(&self.text, options),
            BlockKind::Code => CodeFence::to_html(&self.text, options),
        }
    }
}
