//! Unvalidated parse trees
//!
//! The parser only checks the shape of its input. Connective names are kept
//! exactly as written and symbols are not checked, so that the validator can
//! report every problem with the words the user typed.

use crate::logic::Expression;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxTree {
    /// A bare word in symbol position
    Atomic(String),
    /// `(connective arg ...)`
    Compound {
        connective: String,
        args: Vec<SyntaxTree>,
    },
}

impl SyntaxTree {
    pub fn atomic(name: impl Into<String>) -> Self {
        SyntaxTree::Atomic(name.into())
    }

    pub fn compound(connective: impl Into<String>, args: Vec<SyntaxTree>) -> Self {
        SyntaxTree::Compound {
            connective: connective.into(),
            args,
        }
    }
}

impl fmt::Display for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxTree::Atomic(name) => write!(f, "{}", name),
            SyntaxTree::Compound { connective, args } => {
                write!(f, "({}", connective)?;
                for arg in args {
                    write!(f, " {}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// The canonical syntax of a validated expression
impl From<&Expression> for SyntaxTree {
    fn from(expr: &Expression) -> Self {
        match (expr, expr.connective()) {
            (Expression::Atom(symbol), _) => SyntaxTree::Atomic(symbol.to_string()),
            (_, connective) => SyntaxTree::Compound {
                connective: connective.map(|c| c.keyword()).unwrap_or_default().to_string(),
                args: expr.children().iter().map(SyntaxTree::from).collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_keeps_written_connective() {
        let tree = SyntaxTree::compound(
            "AND",
            vec![
                SyntaxTree::atomic("A"),
                SyntaxTree::compound("Not", vec![SyntaxTree::atomic("B")]),
            ],
        );
        assert_eq!(tree.to_string(), "(AND A (Not B))");
    }

    #[test]
    fn test_from_expression_is_canonical() {
        let expr = Expression::implies(
            Expression::atom("A").unwrap(),
            Expression::xor(vec![Expression::atom("B").unwrap()]).unwrap(),
        );
        let tree = SyntaxTree::from(&expr);
        assert_eq!(
            tree,
            SyntaxTree::compound(
                "if",
                vec![
                    SyntaxTree::atomic("A"),
                    SyntaxTree::compound("xor", vec![SyntaxTree::atomic("B")]),
                ]
            )
        );
    }
}
