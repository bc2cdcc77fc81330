//! Tree renderers.
//!
//! Views are built bottom-up: every child is rendered before its parent,
//! then the root view gets a final touch specific to the output format.

mod html;
mod text;

pub use html::HtmlTreeRenderer;
pub use text::TextTreeRenderer;

use super::TreeNode;

/// Turns a [`TreeNode`] into a string, one node view at a time.
pub trait TreeRenderer {
    /// View of the node's own data.
    fn render_data(&self, node: &TreeNode) -> String;

    /// Combined view of already rendered children.
    fn render_children(&self, views: &[String]) -> String;

    /// Joins a node view with the combined view of its children.
    fn assemble_node_view(&self, node_view: &str, children_view: &str) -> String {
        format!("{node_view}\n{children_view}")
    }

    /// Last edit applied to the root view.
    fn finalize_root_view(&self, view: String) -> String {
        view
    }

    fn build_view(&self, node: &TreeNode) -> String {
        let node_view = self.render_data(node);
        if node.is_leaf() {
            return node_view;
        }

        let views: Vec<String> = node
            .children()
            .iter()
            .map(|child| self.build_view(child))
            .collect();

        let children_view = self.render_children(&views);
        self.assemble_node_view(&node_view, &children_view)
    }

    fn render(&self, root: &TreeNode) -> String {
        let view = self.build_view(root);
        self.finalize_root_view(view)
    }
}

/// Renders a tree with box-drawing characters.
pub fn dump_tree_text(root: &TreeNode) -> String {
    TextTreeRenderer.render(root)
}

/// Renders a tree as nested `<ul>` lists inside a `<p>` tag.
pub fn dump_tree_html(root: &TreeNode, indent: usize) -> String {
    HtmlTreeRenderer::new(indent).render(root)
}
