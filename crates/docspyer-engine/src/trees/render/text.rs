use super::TreeRenderer;
use crate::text::text_to_line;
use crate::trees::TreeNode;

/// Box-drawing text renderer.
///
/// ```text
/// • +
///   ├─ A
///   │  ├─ C
///   │  └─ D
///   └─ B
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TextTreeRenderer;

impl TextTreeRenderer {
    pub const ROOT_SIGN: &'static str = "• ";
    pub const FAKE_NODE: &'static str = "+";
    pub const VERTICAL_LINE: &'static str = "│  ";
    pub const BODY_NODE: &'static str = "├─ ";
    pub const LAST_NODE: &'static str = "└─ ";
}

/// Prefixes the first line with `first` and every other line with `rest`.
fn prefix_lines(view: &str, first: &str, rest: &str) -> String {
    view.lines()
        .enumerate()
        .map(|(i, line)| {
            let prefix = if i == 0 { first } else { rest };
            format!("{prefix}{line}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl TreeRenderer for TextTreeRenderer {
    fn render_data(&self, node: &TreeNode) -> String {
        if node.data.is_empty() {
            Self::FAKE_NODE.to_string()
        } else {
            text_to_line(&node.data)
        }
    }

    fn render_children(&self, views: &[String]) -> String {
        let Some((last, most)) = views.split_last() else {
            return String::new();
        };

        let blank = " ".repeat(Self::LAST_NODE.chars().count());
        most.iter()
            .map(|view| prefix_lines(view, Self::BODY_NODE, Self::VERTICAL_LINE))
            .chain(std::iter::once(prefix_lines(last, Self::LAST_NODE, &blank)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn finalize_root_view(&self, view: String) -> String {
        let blank = " ".repeat(Self::ROOT_SIGN.chars().count());
        prefix_lines(&view, Self::ROOT_SIGN, &blank)
    }
}
