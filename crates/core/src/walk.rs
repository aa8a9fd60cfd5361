use crate::model::ComponentNode;

/// Depth-first traversal over a component tree, preserving document
/// order and visiting each node exactly once with its resolved path.
///
/// The resolved path is the dot-joined chain of keys from the outermost
/// keyed ancestor down to the node itself; a keyless node carries its
/// parent's prefix unchanged and passes it through to its children.
///
/// Recursion descends into `components`, then `columns`, then `rows` of
/// every node regardless of its category. With `include_all` set, every
/// node is visited (containers included); otherwise only nodes without
/// nested component collections are visited, though recursion still
/// descends through the containers. Validation always passes `true` —
/// keys and shortcuts inside conditional or container nodes must be
/// seen.
pub fn walk_components<F>(nodes: &[ComponentNode], include_all: bool, visit: &mut F)
where
    F: FnMut(&ComponentNode, &str),
{
    walk_inner(nodes, include_all, "", visit);
}

fn walk_inner<F>(nodes: &[ComponentNode], include_all: bool, prefix: &str, visit: &mut F)
where
    F: FnMut(&ComponentNode, &str),
{
    for node in nodes {
        let path = match &node.key {
            Some(key) if prefix.is_empty() => key.clone(),
            Some(key) => format!("{}.{}", prefix, key),
            None => prefix.to_string(),
        };

        let is_container = !node.components.is_empty()
            || !node.columns.is_empty()
            || !node.rows.is_empty();

        if include_all || !is_container {
            visit(node, &path);
        }

        walk_inner(&node.components, include_all, &path, visit);
        walk_inner(&node.columns, include_all, &path, visit);
        for row in &node.rows {
            walk_inner(row, include_all, &path, visit);
        }
    }
}
