//! Node labels and the indented tree dump.
//!
//! Both presentation modes go through [`NodeKind`]'s `Display` impl, so the
//! label printed in a full dump is always the label [`label`] returns for the
//! same node.

use super::node::{ExpKind, NodeId, NodeKind, StmtKind, SyntaxTree, MAX_CHILDREN};
use std::fmt::{self, Write};

/// Spaces added per nesting level of the dump.
const INDENT_STEP: usize = 2;

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Stmt(stmt) => match stmt {
                StmtKind::If => f.write_str("If"),
                StmtKind::Repeat => f.write_str("Repeat"),
                StmtKind::Assign { name } => write!(f, "Assign to: {}", name),
                StmtKind::Read { name } => write!(f, "Read: {}", name),
                StmtKind::Write => f.write_str("Write"),
                StmtKind::For { name } => write!(f, "For: {}", name),
                StmtKind::PlusEq { name } => write!(f, "PlusEqual: {}", name),
                StmtKind::Reg => f.write_str("RegExp"),
            },
            NodeKind::Exp(exp) => match exp {
                ExpKind::Op(op) => write!(f, "Op: {}", op.symbol()),
                ExpKind::Const(value) => write!(f, "Const: {}", value),
                ExpKind::Id(name) => write!(f, "Id: {}", name),
            },
        }
    }
}

/// Label of a single node, for callers that walk the tree themselves.
pub fn label(tree: &SyntaxTree, id: NodeId) -> Option<String> {
    tree.get(id).map(|node| node.kind().to_string())
}

/// Indented dump of the whole forest: each node on its own line, its child
/// slots in order beneath it, then its siblings.
pub fn render_tree(tree: &SyntaxTree) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_sequence(tree, tree.roots(), INDENT_STEP, &mut out);
    out
}

fn write_sequence(tree: &SyntaxTree, seq: &[NodeId], indent: usize, out: &mut String) -> fmt::Result {
    for &id in seq {
        let Some(node) = tree.get(id) else { continue };
        writeln!(out, "{:indent$}{}", "", node.kind(), indent = indent)?;
        for slot in 0..MAX_CHILDREN {
            write_sequence(tree, tree.children(id, slot), indent + INDENT_STEP, out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::Listing;
    use crate::scanner::TokenKind;
    use crate::tree::node::ExpType;

    #[test]
    fn test_statement_labels() {
        let cases = [
            (StmtKind::If, "If"),
            (StmtKind::Repeat, "Repeat"),
            (StmtKind::Assign { name: "x".into() }, "Assign to: x"),
            (StmtKind::Read { name: "y".into() }, "Read: y"),
            (StmtKind::Write, "Write"),
            (StmtKind::For { name: "i".into() }, "For: i"),
            (StmtKind::PlusEq { name: "s".into() }, "PlusEqual: s"),
            (StmtKind::Reg, "RegExp"),
        ];
        for (kind, expected) in cases {
            assert_eq!(NodeKind::Stmt(kind).to_string(), expected);
        }
    }

    #[test]
    fn test_expression_labels() {
        assert_eq!(NodeKind::Exp(ExpKind::Op(TokenKind::LessOrEqual)).to_string(), "Op: <=");
        assert_eq!(NodeKind::Exp(ExpKind::Op(TokenKind::And)).to_string(), "Op: and");
        assert_eq!(NodeKind::Exp(ExpKind::Const(-4)).to_string(), "Const: -4");
        assert_eq!(NodeKind::Exp(ExpKind::Id("abc".into())).to_string(), "Id: abc");
    }

    #[test]
    fn test_render_nested_tree() {
        let mut tree = SyntaxTree::new();
        let mut listing = Listing::disabled();
        let read = tree.new_statement(StmtKind::Read { name: "x".into() }, 1, &mut listing).unwrap();
        let cond = tree.new_statement(StmtKind::If, 2, &mut listing).unwrap();
        let test = tree.new_expression(ExpKind::Op(TokenKind::LessThan), 2, &mut listing).unwrap();
        let zero = tree.new_expression(ExpKind::Const(0), 2, &mut listing).unwrap();
        let x = tree.new_expression(ExpKind::Id("x".into()), 2, &mut listing).unwrap();
        let write = tree.new_statement(StmtKind::Write, 3, &mut listing).unwrap();
        let x2 = tree.new_expression(ExpKind::Id("x".into()), 3, &mut listing).unwrap();
        tree.set_type(test, ExpType::Boolean);

        tree.attach(test, 0, zero).unwrap();
        tree.attach(test, 1, x).unwrap();
        tree.attach(cond, 0, test).unwrap();
        tree.attach(write, 0, x2).unwrap();
        tree.attach(cond, 1, write).unwrap();
        tree.push_root(read).unwrap();
        tree.push_root(cond).unwrap();

        let expected = "  Read: x\n  If\n    Op: <\n      Const: 0\n      Id: x\n    Write\n      Id: x\n";
        assert_eq!(render_tree(&tree), expected);
    }

    #[test]
    fn test_render_empty_tree() {
        assert_eq!(render_tree(&SyntaxTree::new()), "");
    }

    #[test]
    fn test_label_unknown_node() {
        assert_eq!(label(&SyntaxTree::new(), 3), None);
    }
}
