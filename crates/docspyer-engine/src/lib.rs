//! # docspyer-engine
//!
//! Text-in, text-out core of the docspyer documentation generator.
//!
//! ```text
//! Markdown text  → markdown::MarkdownParser  → Vec<Block>    → HTML + TOC
//! docstring text → docstrings::DocParser     → Vec<DocBlock> → Markdown/HTML or RST
//! list text      → trees::make_tree          → TreeNode      → text or HTML tree
//! name → names   → trees::make_trees         → Vec<TreeNode> → text trees
//! columns        → tables                    → Markdown or HTML table
//! ```
//!
//! Nothing in this crate touches the file system.

pub mod docstrings;
pub mod error;
pub mod markdown;
pub mod options;
pub mod tables;
pub mod text;
pub mod trees;

// Re-export key types for easier usage
pub use docstrings::{DocBlock, DocParser, VarRecord, doc_as_md, doc_as_rst};
pub use error::{Error, Result};
pub use markdown::{Block, BlockKind, DocHtml, MarkdownParser, make_doc_html};
pub use options::{DocstringVocabulary, MarkdownOptions};
pub use tables::{make_table_html, make_table_md};
pub use trees::{TreeNode, dump_tree_html, dump_tree_text, make_tree, make_trees};
