// syntax (like BNF)
//
// root    = union
// union   = concat ( '|' concat ) ?
// concat  = postfix concat ?
// postfix = atom ( '*' | '+' | '?' ) ?
// atom    = '(' union ')' | '.' | char
// char    = '\' any-char | any char not in "|*+?()"
//
// union is deliberately non-repeating: a second '|' at the same level is
// left unconsumed (inside parentheses the rule re-enters, so nested chains
// parse fine).

pub mod ast;
mod cursor;
mod parser;

pub use ast::{NodeKind, SyntaxNode};
pub use parser::{ParseError, Parser};
