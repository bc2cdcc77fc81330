//! Deep trees from a flat `name → children` mapping.
//!
//! Every entry starts as a two-level tree. Leaves whose name is the root of
//! another tree are then replaced by a copy of that tree, repeatedly, and
//! the trees that were spliced in somewhere disappear from the forest.
//!
//! All nodes live in one [`Arena`] and refer to their children by index,
//! so copying a subtree appends fresh nodes and never shares one.
//!
//! Leaves are matched to roots by name: two different things sharing a
//! name are merged, and cycles stop at the first repeated root name.

use super::TreeNode;
use std::collections::{HashMap, HashSet};

/// Index of a node inside an [`Arena`].
pub type NodeId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
struct ArenaNode {
    name: String,
    /// `None` marks a leaf that can still be expanded.
    children: Option<Vec<NodeId>>,
}

/// Flat node storage for tree merging.
#[derive(Debug, Default)]
pub struct Arena {
    nodes: Vec<ArenaNode>,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, name: String, children: Option<Vec<NodeId>>) -> NodeId {
        self.nodes.push(ArenaNode { name, children });
        self.nodes.len() - 1
    }

    pub fn name(&self, id: NodeId) -> &str {
        &self.nodes[id].name
    }

    /// Children of a node, empty for leaves.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes[id].children.as_deref().unwrap_or_default()
    }

    fn is_leaf(&self, id: NodeId) -> bool {
        self.children(id).is_empty()
    }

    /// Stores a [`TreeNode`] and everything below it.
    pub fn insert_tree(&mut self, node: &TreeNode) -> NodeId {
        let children = node
            .children
            .as_ref()
            .map(|children| children.iter().map(|child| self.insert_tree(child)).collect());
        self.push(node.data.clone(), children)
    }

    /// Stores a root with one leaf per name.
    pub fn insert_stub<I, S>(&mut self, name: impl Into<String>, names: I) -> NodeId
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let children = names
            .into_iter()
            .map(|name| self.push(name.into(), None))
            .collect();
        self.push(name.into(), Some(children))
    }

    /// Builds an owned tree from the node at `id`.
    pub fn to_tree(&self, id: NodeId) -> TreeNode {
        let node = &self.nodes[id];
        TreeNode {
            data: node.name.clone(),
            children: node
                .children
                .as_ref()
                .map(|children| children.iter().map(|&child| self.to_tree(child)).collect()),
        }
    }

    /// Appends a copy of the subtree at `source` and returns the copy's root.
    pub fn copy_subtree(&mut self, source: NodeId) -> NodeId {
        let name = self.nodes[source].name.clone();
        let children = self.copy_children(source);
        self.push(name, children)
    }

    fn copy_children(&mut self, source: NodeId) -> Option<Vec<NodeId>> {
        if self.is_leaf(source) {
            return None;
        }
        let children = self.children(source).to_vec();
        Some(children.into_iter().map(|child| self.copy_subtree(child)).collect())
    }

    /// Leaves below `root` in depth-first order.
    fn leaves(&self, root: NodeId) -> Vec<NodeId> {
        let mut leaves = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            match &self.nodes[id].children {
                None => leaves.push(id),
                Some(children) => stack.extend(children.iter().rev()),
            }
        }
        leaves
    }

    /// Splices copies of the `pending` roots into the leaves of `root`.
    ///
    /// A pass visits every leaf. A leaf named after a pending root receives
    /// a copy of that root's children unless it carries the name of `root`
    /// itself or the same name was already spliced in this pass. Spliced
    /// roots stop being pending, and passes repeat until one splices
    /// nothing. Returns the spliced roots in splice order.
    pub fn expand(&mut self, root: NodeId, pending: &mut HashMap<String, NodeId>) -> Vec<NodeId> {
        let root_name = self.nodes[root].name.clone();
        let mut spliced = Vec::new();

        loop {
            let mut pass: Vec<(String, NodeId)> = Vec::new();

            for leaf in self.leaves(root) {
                let name = &self.nodes[leaf].name;
                if *name == root_name || pass.iter().any(|(done, _)| done == name) {
                    continue;
                }
                let Some(&subroot) = pending.get(name) else {
                    continue;
                };

                pass.push((name.clone(), subroot));
                let copy = self.copy_children(subroot);
                self.nodes[leaf].children = copy;
            }

            if pass.is_empty() {
                break;
            }
            for (name, subroot) in pass {
                pending.remove(&name);
                spliced.push(subroot);
            }
        }
        spliced
    }
}

/// Merges a name-to-names mapping into deep trees.
///
/// Roots keep the mapping's iteration order. Roots without children are
/// dropped from the result.
///
/// ```
/// use docspyer_engine::trees::{dump_tree_text, make_trees};
///
/// let roots = make_trees([("A", vec!["B"]), ("B", vec!["C"])]);
/// assert_eq!(roots.len(), 1);
/// assert_eq!(dump_tree_text(&roots[0]), "• A\n  └─ B\n     └─ C");
/// ```
pub fn make_trees<I, K, V, S>(mapping: I) -> Vec<TreeNode>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut arena = Arena::new();
    let roots: Vec<NodeId> = mapping
        .into_iter()
        .map(|(name, names)| arena.insert_stub(name, names))
        .collect();

    let mut consumed: HashSet<NodeId> = HashSet::new();

    for &root in &roots {
        if consumed.contains(&root) {
            continue;
        }

        let mut pending: HashMap<String, NodeId> = roots
            .iter()
            .filter(|&&other| other != root && !consumed.contains(&other))
            .map(|&other| (arena.name(other).to_string(), other))
            .collect();

        let spliced = arena.expand(root, &mut pending);
        if !spliced.is_empty() {
            log::debug!(
                "tree {} absorbed {}",
                arena.name(root),
                spliced
                    .iter()
                    .map(|&id| arena.name(id))
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            consumed.extend(spliced);
        }
    }

    log::trace!("tree arena holds {} nodes", arena.len());

    roots
        .into_iter()
        .filter(|root| !consumed.contains(root) && !arena.is_leaf(*root))
        .map(|root| arena.to_tree(root))
        .collect()
}

/// Replaces leaves of `root` with copies of matching `subroots`.
///
/// Returns the names of the subroots that were spliced in, in splice order.
/// A leaf named like `root` itself is never expanded.
pub fn expand_tree(root: &mut TreeNode, subroots: &[TreeNode]) -> Vec<String> {
    if subroots.is_empty() {
        return Vec::new();
    }

    let mut arena = Arena::new();
    let root_id = arena.insert_tree(root);
    let mut pending: HashMap<String, NodeId> = subroots
        .iter()
        .map(|subroot| (subroot.data.clone(), arena.insert_tree(subroot)))
        .collect();

    let spliced = arena.expand(root_id, &mut pending);
    *root = arena.to_tree(root_id);

    spliced
        .into_iter()
        .map(|id| arena.name(id).to_string())
        .collect()
}
