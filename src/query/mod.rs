//! Query analysis pipeline: tokenizing, tree parsing, minimal-group
//! extraction, flattening, reconstruction, and OR-keyword tagging.

pub mod flatten;
pub mod groups;
pub mod keywords;
pub mod parser;
pub mod reconstruct;
pub mod token;

pub use flatten::{flatten, flatten_groups, Flat};
pub use groups::{contains_operator, minimal_operator_groups};
pub use keywords::{or_keywords, OrKeyword, Position};
pub use parser::{parse_query, parse_tokens, Node};
pub use reconstruct::reconstruct;
pub use token::{tokenize, Op, Token};

/// Run the full analysis over a raw query: parse it, isolate the minimal
/// operator groups, flatten them, and return the reconstructed oracle query
/// together with its tagged keywords.
pub fn analyze(query: &str) -> (String, Vec<OrKeyword>) {
    let tree = parse_query(query);
    let groups = minimal_operator_groups(&tree);
    let flat = flatten_groups(&groups);
    (reconstruct(&flat), or_keywords(&flat))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_or_pair() {
        // A single minimal group is itself a nested list in the flattened
        // sequence, so it keeps its own wrapping.
        let (query, keywords) = analyze("cat OR feline");
        assert_eq!(query, "((cat) OR (feline))");
        let terms: Vec<&str> = keywords.iter().map(|k| k.term.as_str()).collect();
        assert_eq!(terms, vec!["cat", "feline"]);
        assert_eq!(keywords[0].hint, Some(Position::After));
        assert_eq!(keywords[1].hint, Some(Position::Before));
    }

    #[test]
    fn test_analyze_operator_free_query() {
        // No operator groups at all: the flattened sequence is an empty
        // join, which reconstructs as an empty span with one empty keyword.
        let (query, keywords) = analyze("gene therapy");
        assert_eq!(query, "()");
        assert_eq!(keywords, vec![OrKeyword { term: String::new(), hint: None }]);
    }
}
