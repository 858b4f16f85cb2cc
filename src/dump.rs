use std::fmt::{self, Write};

use crate::parser::{NodeKind, SyntaxNode};

/// Write an indented listing of `node` and every descendant to `out`, one
/// node per line, children one level deeper than their parent.
///
/// Diagnostic output for human inspection; the exact format is not stable.
pub fn dump<W: Write>(node: &SyntaxNode, out: &mut W) -> fmt::Result {
    dump_at(node, 0, out)
}

fn dump_at<W: Write>(node: &SyntaxNode, depth: usize, out: &mut W) -> fmt::Result {
    for _ in 0..depth {
        out.write_str("  ")?;
    }
    out.write_str(node.kind.spec().tag)?;
    if node.kind == NodeKind::Char {
        write!(out, " [{}, {})", node.begin, node.end)?;
    }
    out.write_char('\n')?;

    for child in &node.children {
        dump_at(child, depth + 1, out)?;
    }

    Ok(())
}

/// Render the dump of `node` into a fresh `String`.
pub fn render(node: &SyntaxNode) -> String {
    let mut out = String::new();
    let _ = dump(node, &mut out); // writing to a String cannot fail
    out
}
