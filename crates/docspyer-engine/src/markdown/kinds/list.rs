use crate::markdown::emphasis;
use crate::options::MarkdownOptions;
use crate::trees::{dump_tree_html, make_tree};
use regex::Regex;
use std::sync::LazyLock;

static ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-\s").expect("valid item regex"));

/// Dash list, nested by indentation.
///
/// ```text
/// - Alfa
/// - Bravo
///   - Charlie
///     Delta
/// ```
pub struct List;

impl List {
    pub fn matches(par: &str) -> bool {
        ITEM.is_match(par)
    }

    pub fn to_html(text: &str, options: &MarkdownOptions) -> String {
        let text = emphasis::translate(text);
        let root = make_tree(&text);
        let html = dump_tree_html(&root, options.html_indent);
        html.replace(
            "<p>\n<ul>",
            &format!("<p>\n<ul class=\"{}\">", options.list_class),
        )
    }
}
