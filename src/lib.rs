mod dump;
mod parser;

pub use dump::{dump, render};
pub use parser::{NodeKind, ParseError, Parser, SyntaxNode};
