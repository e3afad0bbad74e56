use super::parser::Node;

/// Check whether a node contains an `AND`/`OR` operator at any depth.
pub fn contains_operator(node: &Node) -> bool {
    match node {
        Node::Term(_) => false,
        Node::Op(_) => true,
        Node::Group(children) => children.iter().any(contains_operator),
    }
}

/// Collect the minimal operator groups of a parsed tree: every group that
/// contains an operator but whose child groups contain none.
///
/// Depth-first, left to right; a nested minimal group always precedes its
/// non-minimal ancestors in the output. The returned nodes borrow the tree.
pub fn minimal_operator_groups(tree: &Node) -> Vec<&Node> {
    let mut groups = Vec::new();
    collect_minimal(tree, &mut groups);
    groups
}

fn collect_minimal<'a>(node: &'a Node, groups: &mut Vec<&'a Node>) {
    let Node::Group(children) = node else {
        return;
    };
    if !contains_operator(node) {
        return;
    }

    let mut child_has_operator = false;
    for child in children {
        if matches!(child, Node::Group(_)) && contains_operator(child) {
            child_has_operator = true;
            collect_minimal(child, groups);
        }
    }
    if !child_has_operator {
        groups.push(node);
    }
}
