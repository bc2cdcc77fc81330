//! Helpers for name-to-names maps such as class bases or module imports.

use super::{TreeNode, dump_tree_text};
use std::collections::BTreeMap;

pub type NameMap = BTreeMap<String, Vec<String>>;

/// Prints every entry of the mapping as a branch of one text tree.
///
/// Returns an empty string for an empty mapping.
pub fn dump_namespace(mapping: &NameMap, rootname: Option<&str>) -> String {
    if mapping.is_empty() {
        return String::new();
    }
    dump_tree_text(&namespace_to_tree(mapping, rootname))
}

fn namespace_to_tree(mapping: &NameMap, rootname: Option<&str>) -> TreeNode {
    let children = mapping
        .iter()
        .map(|(name, names)| {
            TreeNode::with_children(name.clone(), names.iter().map(TreeNode::leaf).collect())
        })
        .collect();
    TreeNode::with_children(rootname.unwrap_or_default(), children)
}

/// Maps every value to the keys that list it.
pub fn invert_map(mapping: &NameMap) -> NameMap {
    let mut inverted = NameMap::new();
    for (key, values) in mapping {
        for value in values {
            let keys = inverted.entry(value.clone()).or_default();
            if !keys.contains(key) {
                keys.push(key.clone());
            }
        }
    }
    inverted
}

/// Keeps only the values that are themselves keys of the mapping.
pub fn exclude_non_native_names(mapping: &NameMap) -> NameMap {
    mapping
        .iter()
        .map(|(name, names)| {
            let native = names
                .iter()
                .filter(|candidate| mapping.contains_key(*candidate))
                .cloned()
                .collect();
            (name.clone(), native)
        })
        .collect()
}
