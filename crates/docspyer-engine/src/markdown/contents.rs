//! Contents and cross links across a set of Markdown documents.
//!
//! Links target `NAME.md#id`, with ids made the same way as the
//! single-document TOC makes them.

use super::ids::make_ids;
use super::kinds::Heading;
use super::parser::MarkdownParser;
use super::toc::heading_items;
use crate::error::{Error, Result};
use crate::trees::{dump_tree_html, make_tree};

/// Named Markdown documents, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sources {
    documents: Vec<(String, String)>,
}

impl Sources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a document, replacing the text of an existing one with that name.
    pub fn insert(&mut self, name: impl Into<String>, markdown: impl Into<String>) {
        let name = name.into();
        let markdown = markdown.into();
        match self.documents.iter_mut().find(|(known, _)| *known == name) {
            Some((_, text)) => *text = markdown,
            None => self.documents.push((name, markdown)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.documents
            .iter()
            .find(|(known, _)| known == name)
            .map(|(_, text)| text.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.documents
            .iter()
            .map(|(name, text)| (name.as_str(), text.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Sources {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut sources = Sources::new();
        for (name, markdown) in iter {
            sources.insert(name, markdown);
        }
        sources
    }
}

fn headings_of(markdown: &str) -> Result<Vec<String>> {
    Ok(MarkdownParser::new()
        .parse(markdown)?
        .into_iter()
        .filter(|block| block.is_heading())
        .map(|block| block.text)
        .collect())
}

/// Heading links of one document as a dash list, not dedented.
fn document_toc(name: &str, markdown: &str) -> Result<String> {
    let headings = headings_of(markdown)?;
    Ok(heading_items(&headings, &format!("{name}.md")).join("\n"))
}

fn list_to_html(list: &str, indent: usize) -> String {
    if list.trim().is_empty() {
        return String::new();
    }
    dump_tree_html(&make_tree(list), indent)
}

/// One HTML tree holding the heading links of every document.
pub fn make_mono_toc(sources: &Sources, indent: usize) -> Result<String> {
    let lists = sources
        .iter()
        .map(|(name, markdown)| document_toc(name, markdown))
        .collect::<Result<Vec<_>>>()?;
    Ok(list_to_html(&lists.join("\n"), indent))
}

/// A Markdown heading per document, each followed by its own HTML TOC.
pub fn make_multi_toc(sources: &Sources, level: usize, indent: usize) -> Result<String> {
    let prefix = "#".repeat(level.max(1));
    let sections = sources
        .iter()
        .map(|(name, markdown)| {
            let heading = format!("{prefix} {name}");
            let toc = list_to_html(&document_toc(name, markdown)?, indent);
            Ok(if toc.is_empty() {
                heading
            } else {
                format!("{heading}\n\n{toc}")
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(sections.join("\n\n"))
}

/// Resolves a heading of a document to a `NAME.md#id` link target.
pub fn resolve_link(sources: &Sources, document: &str, heading: &str) -> Result<String> {
    let markdown = sources.get(document).ok_or_else(|| Error::MissingDocument {
        name: document.to_string(),
    })?;

    let headings = headings_of(markdown)?;
    let texts: Vec<&str> = headings.iter().map(|h| Heading::content(h)).collect();
    let ids = make_ids(&texts);

    texts
        .iter()
        .zip(ids)
        .find(|(text, _)| **text == heading)
        .map(|(_, id)| format!("{document}.md#{id}"))
        .ok_or_else(|| Error::MissingHeading {
            document: document.to_string(),
            heading: heading.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sources() -> Sources {
        [
            ("intro", "# Intro\n\nText.\n\n## Setup"),
            ("api", "# API\n\n## Notes\n\n## Notes"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn mono_toc() {
        let expected = "\
<p>
<ul>
    <li><a href=\"intro.md#intro\">Intro</a>
        <ul>
            <li><a href=\"intro.md#setup\">Setup</a></li>
        </ul>
    </li>
    <li><a href=\"api.md#api\">API</a>
        <ul>
            <li><a href=\"api.md#notes\">Notes</a></li>
            <li><a href=\"api.md#notes-1\">Notes</a></li>
        </ul>
    </li>
</ul>
</p>";
        assert_eq!(make_mono_toc(&sources(), 4).unwrap(), expected);
    }

    #[test]
    fn multi_toc() {
        let sources: Sources = [("intro", "# Intro"), ("empty", "No headings.")]
            .into_iter()
            .collect();
        let expected = "\
### intro

<p>
<ul>
    <li><a href=\"intro.md#intro\">Intro</a></li>
</ul>
</p>

### empty";
        assert_eq!(make_multi_toc(&sources, 3, 4).unwrap(), expected);
    }

    #[test]
    fn resolve_known_heading() {
        assert_eq!(
            resolve_link(&sources(), "intro", "Setup").unwrap(),
            "intro.md#setup"
        );
        assert_eq!(
            resolve_link(&sources(), "api", "Notes").unwrap(),
            "api.md#notes"
        );
    }

    #[test]
    fn resolve_missing_document() {
        assert_eq!(
            resolve_link(&sources(), "guide", "Setup").unwrap_err(),
            Error::MissingDocument {
                name: "guide".to_string()
            }
        );
    }

    #[test]
    fn resolve_missing_heading() {
        assert_eq!(
            resolve_link(&sources(), "intro", "Teardown").unwrap_err(),
            Error::MissingHeading {
                document: "intro".to_string(),
                heading: "Teardown".to_string()
            }
        );
    }

    #[test]
    fn insert_replaces_existing_document() {
        let mut sources = Sources::new();
        sources.insert("a", "# One");
        sources.insert("a", "# Two");
        assert_eq!(sources.get("a"), Some("# Two"));
        assert_eq!(sources.iter().count(), 1);
    }

    #[test]
    fn mono_toc_without_headings() {
        let sources: Sources = [("a", "text")].into_iter().collect();
        assert_eq!(make_mono_toc(&sources, 4).unwrap(), "");
    }
}
