//! Settings passed into parsers and renderers at construction time.
//!
//! Both structs deserialize with `#[serde(default)]`, so a config file only
//! needs to name the fields it changes.

use serde::{Deserialize, Serialize};

/// Rendering settings for Markdown blocks, tables and trees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownOptions {
    /// Code block languages rendered as `<pre><code class="language-…">`.
    pub code_languages: Vec<String>,
    /// CSS class of `<pre>` for code blocks outside `code_languages` with no language tag.
    pub default_code_class: String,
    /// CSS class added to the outer `<ul>` of Markdown lists.
    pub list_class: String,
    /// Marker emitted in front of every heading so TOC ids can be spliced in later.
    pub toc_anchor: String,
    /// Spaces per nesting level in HTML lists and tables.
    pub html_indent: usize,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            code_languages: vec!["python".to_string(), "c".to_string()],
            default_code_class: "docstring".to_string(),
            list_class: "md-list".to_string(),
            toc_anchor: r#"<div class="toc-anchor"></div>"#.to_string(),
            html_indent: 4,
        }
    }
}

impl MarkdownOptions {
    pub fn is_code_language(&self, lang: &str) -> bool {
        self.code_languages.iter().any(|known| known == lang)
    }
}

/// Heading words recognised by the docstring parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocstringVocabulary {
    /// Headings of free-text sections.
    pub sections: Vec<String>,
    /// Headings of variable lists.
    pub varlists: Vec<String>,
}

impl Default for DocstringVocabulary {
    fn default() -> Self {
        Self {
            sections: ["Notes", "Methods", "Examples", "See Also", "Notations"]
                .map(String::from)
                .to_vec(),
            varlists: [
                "Parameters",
                "Attributes",
                "Properties",
                "Settings",
                "Returns",
                "Raises",
                "Keys",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}
