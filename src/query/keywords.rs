use serde::Serialize;

use super::flatten::Flat;

/// Where the ` OR ` separator sits relative to a keyword in the
/// reconstructed query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Before,
    After,
}

/// A removable keyword with its separator position hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrKeyword {
    pub term: String,
    pub hint: Option<Position>,
}

impl OrKeyword {
    /// The literal substring whose removal from the reconstructed query
    /// eliminates this keyword.
    pub fn removal_text(&self) -> String {
        match self.hint {
            Some(Position::Before) => format!(" OR ({})", self.term),
            Some(Position::After) => format!("({}) OR ", self.term),
            None => format!("({})", self.term),
        }
    }
}

/// Collect every non-operator leaf of a flattened structure, left to right,
/// and tag it: the first of several keywords carries `After` (its separator
/// follows it), the rest carry `Before`, a lone keyword carries no hint.
pub fn or_keywords(flat: &Flat) -> Vec<OrKeyword> {
    let mut terms = Vec::new();
    collect_terms(flat, &mut terms);

    let mut keywords = Vec::with_capacity(terms.len());
    let mut terms = terms.into_iter();
    if let Some(first) = terms.next() {
        let hint = if terms.len() > 0 {
            Some(Position::After)
        } else {
            None
        };
        keywords.push(OrKeyword { term: first, hint });
        keywords.extend(terms.map(|term| OrKeyword {
            term,
            hint: Some(Position::Before),
        }));
    }
    keywords
}

fn collect_terms(flat: &Flat, terms: &mut Vec<String>) {
    match flat {
        Flat::Leaf(leaf) => terms.push(leaf.clone()),
        Flat::Op(_) => {}
        Flat::List(children) => children.iter().for_each(|c| collect_terms(c, terms)),
    }
}
