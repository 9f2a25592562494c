//! Propositional expressions over named symbols
//!
//! `Expression` is the validated form of a formula. Connectives are a closed
//! set and the fixed-arity ones carry exactly their operands, so a tree that
//! exists is well formed. Trees are never mutated after construction.

use crate::error::ValidationError;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// Characters allowed in a propositional symbol
pub fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// A propositional symbol: a non-empty run of ASCII letters, digits and `_`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() || !name.chars().all(is_symbol_char) {
            return Err(ValidationError::InvalidSymbol(name));
        }
        Ok(Symbol(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Symbol {
    type Error = ValidationError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Symbol::new(name)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

/// How many operands a connective takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "exactly {}", n),
            Arity::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

/// Logical connective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Connective {
    And,
    Or,
    Xor,
    Not,
    If,
    Iff,
}

impl Connective {
    pub const ALL: [Connective; 6] = [
        Connective::And,
        Connective::Or,
        Connective::Xor,
        Connective::Not,
        Connective::If,
        Connective::Iff,
    ];

    /// Canonical (lower-case) keyword used when printing
    pub fn keyword(self) -> &'static str {
        match self {
            Connective::And => "and",
            Connective::Or => "or",
            Connective::Xor => "xor",
            Connective::Not => "not",
            Connective::If => "if",
            Connective::Iff => "iff",
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            Connective::Not => Arity::Exactly(1),
            Connective::If | Connective::Iff => Arity::Exactly(2),
            Connective::And | Connective::Or | Connective::Xor => Arity::AtLeast(1),
        }
    }
}

impl FromStr for Connective {
    type Err = ValidationError;

    /// Keywords are matched case-insensitively
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Connective::ALL
            .into_iter()
            .find(|c| c.keyword().eq_ignore_ascii_case(name))
            .ok_or_else(|| ValidationError::UnknownConnective(name.to_string()))
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Operands of `and`, `or` or `xor`: never empty
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Operands(Vec<Expression>);

impl Operands {
    /// `None` for an empty list
    pub fn new(operands: Vec<Expression>) -> Option<Self> {
        if operands.is_empty() {
            None
        } else {
            Some(Operands(operands))
        }
    }

    pub fn as_slice(&self) -> &[Expression] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Expression> {
        self.0
    }
}

impl Deref for Operands {
    type Target = [Expression];

    fn deref(&self) -> &[Expression] {
        &self.0
    }
}

/// A validated propositional formula
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    /// Atomic proposition
    Atom(Symbol),
    /// Negation
    Not(Box<Expression>),
    /// Material implication: antecedent, consequent
    If(Box<[Expression; 2]>),
    /// Biconditional
    Iff(Box<[Expression; 2]>),
    /// Conjunction of one or more operands
    And(Operands),
    /// Disjunction of one or more operands
    Or(Operands),
    /// Odd parity of one or more operands
    Xor(Operands),
}

impl Expression {
    pub fn atom(name: impl Into<String>) -> Result<Self, ValidationError> {
        Symbol::new(name).map(Expression::Atom)
    }

    pub fn not(operand: Expression) -> Self {
        Expression::Not(Box::new(operand))
    }

    pub fn implies(antecedent: Expression, consequent: Expression) -> Self {
        Expression::If(Box::new([antecedent, consequent]))
    }

    pub fn iff(left: Expression, right: Expression) -> Self {
        Expression::Iff(Box::new([left, right]))
    }

    pub fn and(operands: Vec<Expression>) -> Result<Self, ValidationError> {
        Expression::compound(Connective::And, operands)
    }

    pub fn or(operands: Vec<Expression>) -> Result<Self, ValidationError> {
        Expression::compound(Connective::Or, operands)
    }

    pub fn xor(operands: Vec<Expression>) -> Result<Self, ValidationError> {
        Expression::compound(Connective::Xor, operands)
    }

    /// Build a compound node, checking the operand count against the connective
    pub fn compound(
        connective: Connective,
        mut operands: Vec<Expression>,
    ) -> Result<Self, ValidationError> {
        let arity = connective.arity();
        if !arity.accepts(operands.len()) {
            return Err(ValidationError::ArityMismatch {
                connective: connective.keyword().to_string(),
                expected: arity,
                actual: operands.len(),
            });
        }

        Ok(match connective {
            Connective::And => Expression::And(Operands(operands)),
            Connective::Or => Expression::Or(Operands(operands)),
            Connective::Xor => Expression::Xor(Operands(operands)),
            Connective::Not => Expression::not(operands.remove(0)),
            Connective::If | Connective::Iff => {
                let right = operands.remove(1);
                let left = operands.remove(0);
                if connective == Connective::If {
                    Expression::implies(left, right)
                } else {
                    Expression::iff(left, right)
                }
            }
        })
    }

    /// The connective at the root, or `None` for an atom
    pub fn connective(&self) -> Option<Connective> {
        match self {
            Expression::Atom(_) => None,
            Expression::Not(_) => Some(Connective::Not),
            Expression::If(_) => Some(Connective::If),
            Expression::Iff(_) => Some(Connective::Iff),
            Expression::And(_) => Some(Connective::And),
            Expression::Or(_) => Some(Connective::Or),
            Expression::Xor(_) => Some(Connective::Xor),
        }
    }

    /// Operands in order; empty for an atom
    pub fn children(&self) -> &[Expression] {
        match self {
            Expression::Atom(_) => &[],
            Expression::Not(operand) => std::slice::from_ref(&**operand),
            Expression::If(operands) | Expression::Iff(operands) => &operands[..],
            Expression::And(operands) | Expression::Or(operands) | Expression::Xor(operands) => {
                operands.as_slice()
            }
        }
    }

    /// A bare symbol or the direct negation of one, with the value it asserts
    pub fn as_literal(&self) -> Option<(&Symbol, bool)> {
        match self {
            Expression::Atom(symbol) => Some((symbol, true)),
            Expression::Not(operand) => match &**operand {
                Expression::Atom(symbol) => Some((symbol, false)),
                _ => None,
            },
            _ => None,
        }
    }

    /// Distinct symbols in first-occurrence (pre-order, left-to-right) order
    pub fn symbols(&self) -> IndexSet<Symbol> {
        let mut symbols = IndexSet::new();
        self.collect_symbols(&mut symbols);
        symbols
    }

    /// Append symbols not already present, keeping first-occurrence order
    pub fn collect_symbols(&self, symbols: &mut IndexSet<Symbol>) {
        match self {
            Expression::Atom(symbol) => {
                if !symbols.contains(symbol) {
                    symbols.insert(symbol.clone());
                }
            }
            _ => {
                for child in self.children() {
                    child.collect_symbols(symbols);
                }
            }
        }
    }

    /// Number of nodes in the tree
    pub fn size(&self) -> usize {
        1 + self.children().iter().map(Expression::size).sum::<usize>()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, self.connective()) {
            (Expression::Atom(symbol), _) => write!(f, "{}", symbol),
            (_, Some(connective)) => {
                write!(f, "({}", connective)?;
                for child in self.children() {
                    write!(f, " {}", child)?;
                }
                write!(f, ")")
            }
            (_, None) => unreachable!("only atoms lack a connective"),
        }
    }
}
