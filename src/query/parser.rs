use super::token::{tokenize, Op, Token};

/// One node of the parsed query tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A searchable keyword
    Term(String),
    /// `AND` / `OR`
    Op(Op),
    /// A parenthesized span (or the implicit top-level span)
    Group(Vec<Node>),
}

impl Node {
    pub fn term(s: &str) -> Node {
        Node::Term(s.to_string())
    }

    pub fn group(children: Vec<Node>) -> Node {
        Node::Group(children)
    }
}

/// Tokenize and parse a raw query string in one step. The result is always
/// the implicit top-level `Group`.
pub fn parse_query(query: &str) -> Node {
    parse_tokens(&tokenize(query))
}

/// Parse an already-tokenized query.
pub fn parse_tokens(tokens: &[Token]) -> Node {
    let mut parser = TreeParser::new(tokens);
    Node::Group(parser.parse_group())
}

/// Single-pass parser: a cursor over an immutable token slice, consuming
/// left to right with no backtracking.
struct TreeParser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> TreeParser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn parse_group(&mut self) -> Vec<Node> {
        let mut children = Vec::new();
        while let Some(token) = self.next() {
            match token {
                Token::Open => children.push(Node::Group(self.parse_group())),
                // Also ends the top-level group when unmatched: the rest of
                // the input at this level is dropped. Accepted quirk, not an
                // error.
                Token::Close => return children,
                Token::Op(op) => children.push(Node::Op(*op)),
                Token::Term(term) => children.push(Node::Term(term.clone())),
            }
        }
        children
    }

    fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }
}
