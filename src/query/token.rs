use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Boolean operator joining sibling terms or groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    And,
    Or,
}

impl Op {
    /// Canonical uppercase spelling used when rendering queries.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::And => "AND",
            Op::Or => "OR",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One atomic piece of a raw query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `(`
    Open,
    /// `)`
    Close,
    /// `AND` or `OR`, matched case-insensitively on word boundaries
    Op(Op),
    /// Any other run of non-whitespace, non-paren characters (case preserved)
    Term(String),
}

fn token_regex() -> &'static Regex {
    static TOKEN_RE: OnceLock<Regex> = OnceLock::new();
    // Preference order matters: parens, whole-word operators, then a maximal
    // term run. "ANDROID" has no word boundary after "AND" so it falls
    // through to the term branch.
    TOKEN_RE.get_or_init(|| Regex::new(r"(?i)[()]|\bAND\b|\bOR\b|[^\s()]+").unwrap())
}

/// Split a raw query string into tokens. Never fails; unrecognized input is
/// simply swallowed by the term branch, and empty input yields no tokens.
pub fn tokenize(query: &str) -> Vec<Token> {
    token_regex()
        .find_iter(query)
        .map(|m| match m.as_str() {
            "(" => Token::Open,
            ")" => Token::Close,
            s if s.eq_ignore_ascii_case("AND") => Token::Op(Op::And),
            s if s.eq_ignore_ascii_case("OR") => Token::Op(Op::Or),
            s => Token::Term(s.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(s: &str) -> Token {
        Token::Term(s.to_string())
    }

    #[test]
    fn test_tokenize_example() {
        let tokens = tokenize("(a AND b) OR c");
        assert_eq!(
            tokens,
            vec![
                Token::Open,
                term("a"),
                Token::Op(Op::And),
                term("b"),
                Token::Close,
                Token::Op(Op::Or),
                term("c"),
            ]
        );
    }

    #[test]
    fn test_operators_case_insensitive() {
        for spelling in ["and", "And", "aNd", "AND"] {
            let tokens = tokenize(spelling);
            assert_eq!(tokens, vec![Token::Op(Op::And)], "spelling {spelling:?}");
        }
        for spelling in ["or", "Or", "oR", "OR"] {
            let tokens = tokenize(spelling);
            assert_eq!(tokens, vec![Token::Op(Op::Or)], "spelling {spelling:?}");
        }
    }

    #[test]
    fn test_operator_needs_word_boundary() {
        assert_eq!(tokenize("ANDROID"), vec![term("ANDROID")]);
        assert_eq!(tokenize("ORGAN"), vec![term("ORGAN")]);
        assert_eq!(tokenize("minor"), vec![term("minor")]);
    }

    #[test]
    fn test_term_case_preserved() {
        assert_eq!(tokenize("BrCa1"), vec![term("BrCa1")]);
    }

    #[test]
    fn test_parens_split_without_spaces() {
        let tokens = tokenize("(gene)(therapy)");
        assert_eq!(
            tokens,
            vec![
                Token::Open,
                term("gene"),
                Token::Close,
                Token::Open,
                term("therapy"),
                Token::Close,
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t ").is_empty());
    }
}
