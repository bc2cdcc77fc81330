//! Table of contents built from heading blocks.

use super::ids::make_ids;
use super::kinds::Heading;
use crate::text::dedent;
use crate::trees::{dump_tree_html, make_tree};

/// Builds a TOC as an HTML list of links to heading anchors.
pub struct TocMaker {
    indent: usize,
}

impl Default for TocMaker {
    fn default() -> Self {
        Self { indent: 4 }
    }
}

impl TocMaker {
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }

    /// HTML list for the given heading lines, `""` when there are none.
    pub fn make_toc<S: AsRef<str>>(&self, headings: &[S]) -> String {
        if headings.is_empty() {
            return String::new();
        }
        let list = toc_as_list(headings, "");
        dump_tree_html(&make_tree(&list), self.indent)
    }
}

/// Dash list of heading links, nested two spaces per level below 1.
///
/// Each link points at `{target}#{id}`; an empty target keeps links local.
pub fn toc_as_list<S: AsRef<str>>(headings: &[S], target: &str) -> String {
    let items = heading_items(headings, target);
    dedent(&items.join("\n"))
}

pub(crate) fn heading_items<S: AsRef<str>>(headings: &[S], target: &str) -> Vec<String> {
    let texts: Vec<&str> = headings
        .iter()
        .map(|heading| Heading::content(heading.as_ref()))
        .collect();
    let ids = make_ids(&texts);

    headings
        .iter()
        .zip(texts.iter().zip(ids))
        .map(|(heading, (text, id))| {
            let level = Heading::level(heading.as_ref()).max(1);
            let indent = "  ".repeat(level - 1);
            format!("{indent}- <a href=\"{target}#{id}\">{text}</a>")
        })
        .collect()
}
