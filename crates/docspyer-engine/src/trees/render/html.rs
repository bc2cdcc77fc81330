use super::TreeRenderer;
use crate::text::{dedent, indent, text_to_line};
use crate::trees::TreeNode;

/// Renders a tree as nested HTML lists.
///
/// The root item becomes a `<p>` holding the outermost `<ul>`.
#[derive(Debug, Clone)]
pub struct HtmlTreeRenderer {
    indent: String,
}

impl Default for HtmlTreeRenderer {
    fn default() -> Self {
        Self::new(4)
    }
}

impl HtmlTreeRenderer {
    pub fn new(indent: usize) -> Self {
        Self {
            indent: " ".repeat(indent),
        }
    }

    fn indent_text(&self, text: &str) -> String {
        indent(text, &self.indent)
    }

    fn dedent_tag_body(view: &str) -> String {
        let lines: Vec<&str> = view.lines().collect();
        if lines.len() < 2 {
            return view.to_string();
        }
        let body = dedent(&lines[1..lines.len() - 1].join("\n"));
        format!("{}\n{}\n{}", lines[0], body, lines[lines.len() - 1])
    }

    fn change_tag_to_p(view: &str) -> String {
        let mut lines: Vec<String> = view.lines().map(String::from).collect();
        if let Some(first) = lines.first_mut() {
            *first = first.replace("<li>", "<p>");
        }
        if let Some(last) = lines.last_mut() {
            *last = last.replace("</li>", "</p>");
        }
        lines.join("\n")
    }
}

impl TreeRenderer for HtmlTreeRenderer {
    fn render_data(&self, node: &TreeNode) -> String {
        format!("<li>{}</li>", text_to_line(&node.data))
    }

    fn render_children(&self, views: &[String]) -> String {
        format!("<ul>\n{}\n</ul>", self.indent_text(&views.join("\n")))
    }

    fn assemble_node_view(&self, node_view: &str, children_view: &str) -> String {
        let head = node_view.strip_suffix("</li>").unwrap_or(node_view);
        format!("{head}\n{}\n</li>", self.indent_text(children_view))
    }

    fn finalize_root_view(&self, view: String) -> String {
        Self::change_tag_to_p(&Self::dedent_tag_body(&view))
    }
}
