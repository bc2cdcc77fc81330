//! Tree building and rendering.
//!
//! ## Modules
//!
//! - `list` - indented dash lists to [`TreeNode`] trees
//! - `render` - trees to box-drawing text or nested HTML lists
//! - `deep` - flat `name → children` mappings to deep trees
//! - `namespace` - inheritance and import maps printed as trees

pub mod deep;
pub mod list;
pub mod namespace;
pub mod render;

pub use deep::{Arena, NodeId, expand_tree, make_trees};
pub use list::{TreeNode, make_tree};
pub use namespace::{dump_namespace, exclude_non_native_names, invert_map};
pub use render::{HtmlTreeRenderer, TextTreeRenderer, TreeRenderer, dump_tree_html, dump_tree_text};
