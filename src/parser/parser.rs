use thiserror::Error;

use super::ast::{NodeKind, SyntaxNode};
use super::cursor::Cursor;

/// Characters that cannot appear as bare literals.
const META_CHARS: &str = "|*+?()";

/// Postfix repetition operators, tried once after every atom.
const POSTFIX_CHARS: &str = "+?*";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The input does not begin with any parseable expression.
    #[error("pattern does not contain a valid expression")]
    NoMatch,
    /// Input remained after the top-level expression.
    #[error("unexpected trailing input: {0:?}")]
    TrailingInput(String),
}

pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    /// Parse `pattern`, requiring the whole input to be consumed.
    pub fn parse(pattern: &str) -> Result<SyntaxNode, ParseError> {
        let (root, rest) = Self::parse_prefix(pattern)?;
        if rest.is_empty() {
            Ok(root)
        } else {
            Err(ParseError::TrailingInput(rest.to_owned()))
        }
    }

    /// Parse the longest expression prefix of `pattern`, returning the tree
    /// together with the unconsumed remainder.
    pub fn parse_prefix(pattern: &str) -> Result<(SyntaxNode, &str), ParseError> {
        let mut parser = Parser {
            cursor: Cursor::new(pattern),
        };

        match parser.parse_union() {
            Some(root) => Ok((root, parser.cursor.rest())),
            None => Err(ParseError::NoMatch),
        }
    }

    /// union = concat ( '|' concat ) ?
    ///
    /// At most one alternative per level; when '|' is present but no valid
    /// right side follows, the '|' is left unconsumed and the left side
    /// stands alone.
    fn parse_union(&mut self) -> Option<SyntaxNode> {
        let lhs = self.parse_concat()?;

        let mark = self.cursor.mark();
        if self.cursor.match_char('|') {
            if let Some(rhs) = self.parse_concat() {
                return Some(SyntaxNode::new(NodeKind::Or, vec![lhs, rhs]));
            }
        }
        self.cursor.rewind(mark);

        Some(lhs)
    }

    /// concat = postfix concat ?
    ///
    /// Adjacent terms nest to the right: "abc" becomes And(a, And(b, c)).
    fn parse_concat(&mut self) -> Option<SyntaxNode> {
        let lhs = self.parse_postfix()?;

        match self.parse_concat() {
            Some(rhs) => Some(SyntaxNode::new(NodeKind::And, vec![lhs, rhs])),
            None => Some(lhs),
        }
    }

    /// postfix = atom ( '*' | '+' | '?' ) ?
    fn parse_postfix(&mut self) -> Option<SyntaxNode> {
        let atom = self.parse_atom()?;

        let kind = match self.cursor.match_any_char_in(POSTFIX_CHARS) {
            Some('+') => NodeKind::OneOrMore,
            Some('?') => NodeKind::Optional,
            Some('*') => NodeKind::ZeroOrMore,
            _ => return Some(atom),
        };

        Some(SyntaxNode::new(kind, vec![atom]))
    }

    /// atom = '(' union ')' | '.' | char
    fn parse_atom(&mut self) -> Option<SyntaxNode> {
        self.parse_group()
            .or_else(|| self.parse_any())
            .or_else(|| self.parse_literal())
    }

    /// A parenthesized subexpression, rewound entirely when the body or the
    /// closing ')' is missing.
    fn parse_group(&mut self) -> Option<SyntaxNode> {
        let mark = self.cursor.mark();

        if self.cursor.match_char('(') {
            if let Some(body) = self.parse_union() {
                if self.cursor.match_char(')') {
                    return Some(body);
                }
            }
        }
        self.cursor.rewind(mark);

        None
    }

    /// '.' matches any character.
    fn parse_any(&mut self) -> Option<SyntaxNode> {
        if self.cursor.match_char('.') {
            return Some(SyntaxNode::any_char());
        }

        None
    }

    /// char = '\\' escaped | any char not in META_CHARS
    fn parse_literal(&mut self) -> Option<SyntaxNode> {
        let mark = self.cursor.mark();

        let c = self.cursor.match_char_not_in(META_CHARS)?;
        let c = if c == '\\' {
            match self.cursor.match_any_char() {
                Some(next) => unescape(next),
                None => {
                    // Trailing backslash: nothing to escape.
                    self.cursor.rewind(mark);
                    return None;
                }
            }
        } else {
            c
        };

        Some(SyntaxNode::literal(c))
    }
}

/// Translate the character following a backslash; anything outside the
/// table maps to itself.
fn unescape(c: char) -> char {
    match c {
        'b' => '\u{8}',
        'n' => '\n',
        'f' => '\u{c}',
        'r' => '\r',
        't' => '\t',
        _ => c,
    }
}
