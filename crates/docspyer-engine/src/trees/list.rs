use crate::text::dedent;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// First list item, possibly indented.
static FIRST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^ *- ").expect("valid item regex"));

/// Item boundaries once the items have been dedented.
static ITEM_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^- +").expect("valid boundary regex"));

/// Node of a text or name tree.
///
/// A node is a leaf when `children` is `None` or empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub data: String,
    pub children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    pub fn leaf(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            children: None,
        }
    }

    pub fn with_children(data: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            data: data.into(),
            children: Some(children),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.as_ref().is_none_or(|c| c.is_empty())
    }

    /// Children as a slice, empty for leaves.
    pub fn children(&self) -> &[TreeNode] {
        self.children.as_deref().unwrap_or_default()
    }
}

/// Builds a tree from text holding an optional header and a dash list.
///
/// The header becomes the root data and every item becomes a child whose
/// own text is split again, so indented sub-lists become grandchildren.
///
/// ```
/// use docspyer_engine::trees::{make_tree, dump_tree_text};
///
/// let root = make_tree("- A\n  - C\n- B");
/// assert_eq!(dump_tree_text(&root), "• +\n  ├─ A\n  │  └─ C\n  └─ B");
/// ```
pub fn make_tree(text: &str) -> TreeNode {
    let Some((header, items)) = split_text(text) else {
        return TreeNode::leaf("");
    };

    if items.is_empty() {
        return TreeNode::leaf(header);
    }

    let children = items.iter().map(String::as_str).map(make_tree).collect();
    TreeNode::with_children(header, children)
}

/// Splits list text into its header and raw item texts.
///
/// Returns `None` when nothing is left after trimming whitespace and
/// trailing dashes.
pub fn split_text(source: &str) -> Option<(String, Vec<String>)> {
    let text = source.trim().trim_end_matches('-');
    if text.is_empty() {
        return None;
    }
    Some((fetch_header(text), fetch_items(text)))
}

fn find_first_item(text: &str) -> Option<usize> {
    FIRST_ITEM.find(text).map(|m| m.start())
}

pub(crate) fn fetch_header(text: &str) -> String {
    let end = find_first_item(text).unwrap_or(text.len());
    text[..end].trim().to_string()
}

pub(crate) fn fetch_items(text: &str) -> Vec<String> {
    let Some(start) = find_first_item(text) else {
        return Vec::new();
    };

    let dedented = dedent(&text[start..]);
    ITEM_BOUNDARY
        .split(&dedented)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}
