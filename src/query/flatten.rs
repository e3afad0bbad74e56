use super::parser::Node;
use super::token::Op;

/// A flattened query structure: pure-`AND` runs collapsed into single
/// space-joined leaves, everything else kept as a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flat {
    /// A term, or a joined `a AND b` run
    Leaf(String),
    Op(Op),
    List(Vec<Flat>),
}

impl Flat {
    pub fn leaf(s: &str) -> Flat {
        Flat::Leaf(s.to_string())
    }
}

/// Flatten a single node: children first, then collapse the group into one
/// joined leaf when it contains no `OR` and no nested list.
pub fn flatten(node: &Node) -> Flat {
    match node {
        Node::Term(term) => Flat::Leaf(term.clone()),
        Node::Op(op) => Flat::Op(*op),
        Node::Group(children) => collapse(children.iter().map(flatten).collect()),
    }
}

/// Flatten a sequence of sibling groups (the minimal-group list) as if it
/// were one group, so the sequence itself is subject to the same collapse
/// test as any nested span.
pub fn flatten_groups(groups: &[&Node]) -> Flat {
    collapse(groups.iter().map(|g| flatten(g)).collect())
}

fn collapse(children: Vec<Flat>) -> Flat {
    let joinable = children
        .iter()
        .all(|c| !matches!(c, Flat::Op(Op::Or) | Flat::List(_)));
    if joinable {
        let parts: Vec<&str> = children
            .iter()
            .map(|c| match c {
                Flat::Leaf(s) => s.as_str(),
                Flat::Op(op) => op.as_str(),
                Flat::List(_) => unreachable!("lists are not joinable"),
            })
            .collect();
        Flat::Leaf(parts.join(" "))
    } else {
        Flat::List(children)
    }
}

/// Re-apply the collapse test to an already-flattened structure. Used by the
/// idempotence tests; flattening twice never changes the result.
#[cfg(test)]
pub fn reflatten(flat: &Flat) -> Flat {
    match flat {
        Flat::Leaf(s) => Flat::Leaf(s.clone()),
        Flat::Op(op) => Flat::Op(*op),
        Flat::List(children) => collapse(children.iter().map(reflatten).collect()),
    }
}
