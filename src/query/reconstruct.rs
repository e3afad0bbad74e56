use super::flatten::Flat;

/// Render a flattened structure back into a query string for the oracle.
///
/// Every leaf is wrapped in parentheses, operators render bare, and nested
/// lists are wrapped — except the outermost list, which stays unwrapped. The
/// elimination engine removes literal substrings from this exact string, so
/// the rendering here and the snippets built by the keyword tagger must stay
/// in sync.
pub fn reconstruct(flat: &Flat) -> String {
    reconstruct_part(flat, true)
}

fn reconstruct_part(flat: &Flat, top_level: bool) -> String {
    match flat {
        Flat::Leaf(leaf) => format!("({leaf})"),
        Flat::Op(op) => op.as_str().to_string(),
        Flat::List(children) => {
            let joined = children
                .iter()
                .map(|c| reconstruct_part(c, false))
                .collect::<Vec<_>>()
                .join(" ");
            if top_level {
                joined
            } else {
                format!("({joined})")
            }
        }
    }
}
