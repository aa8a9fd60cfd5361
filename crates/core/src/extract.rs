//! Read-only projections over a component tree. Each returns an ordered
//! `Vec` — order matters for duplicate-diff reporting, so these are
//! never sets.

use crate::model::ComponentNode;
use crate::walk::walk_components;

/// Every defined component key, in traversal order.
pub fn component_keys(components: &[ComponentNode]) -> Vec<String> {
    let mut keys = Vec::new();
    walk_components(components, true, &mut |node, _path| {
        if let Some(key) = &node.key {
            keys.push(key.clone());
        }
    });
    keys
}

/// The resolved path of every data-bearing input node with a defined
/// key, in traversal order.
pub fn component_paths(components: &[ComponentNode]) -> Vec<String> {
    let mut paths = Vec::new();
    walk_components(components, true, &mut |node, path| {
        if node.input && node.key.is_some() {
            paths.push(path.to_string());
        }
    });
    paths
}

/// Every component shortcut plus every option-level shortcut inside
/// `values`, each capitalized, in traversal order.
///
/// An empty-string shortcut means "no shortcut bound" — documents
/// routinely carry `"shortcut": ""` as a default — so empties are not
/// collected at either level.
pub fn component_shortcuts(components: &[ComponentNode]) -> Vec<String> {
    let mut shortcuts = Vec::new();
    walk_components(components, true, &mut |node, _path| {
        if let Some(shortcut) = node.shortcut.as_deref().filter(|s| !s.is_empty()) {
            shortcuts.push(capitalize(shortcut));
        }
        for value in &node.values {
            if let Some(shortcut) = value.shortcut.as_deref().filter(|s| !s.is_empty()) {
                shortcuts.push(capitalize(shortcut));
            }
        }
    });
    shortcuts
}

/// Uppercase the first character and lowercase the rest, so shortcut
/// comparison and pattern matching see one canonical spelling
/// ("enter" and "ENTER" both become "Enter").
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
