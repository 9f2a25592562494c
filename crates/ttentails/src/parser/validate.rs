//! Validation of parse trees
//!
//! Checks connective names and operand counts, and that every symbol uses
//! only `[A-Za-z0-9_]`. A valid tree converts into an [`Expression`].

use super::syntax::SyntaxTree;
use crate::error::{ValidationError, ValidationErrors};
use crate::logic::{Connective, Expression, Symbol};
use std::str::FromStr;

impl SyntaxTree {
    /// Whether the whole tree is well formed. Has no side effects.
    pub fn is_valid(&self) -> bool {
        match self {
            SyntaxTree::Atomic(name) => Symbol::new(name.as_str()).is_ok(),
            SyntaxTree::Compound { connective, args } => {
                let arity_ok = connective
                    .parse::<Connective>()
                    .map(|c| c.arity().accepts(args.len()))
                    .unwrap_or(false);
                arity_ok && args.iter().all(SyntaxTree::is_valid)
            }
        }
    }

    /// Convert into a typed expression, or report every offending node.
    ///
    /// Operands of an invalid node are still checked, so one call surfaces
    /// all problems in the tree.
    pub fn validate(&self) -> Result<Expression, ValidationErrors> {
        let mut errors = Vec::new();
        match self.check(&mut errors) {
            Some(expr) if errors.is_empty() => Ok(expr),
            _ => Err(ValidationErrors::new(errors)),
        }
    }

    fn check(&self, errors: &mut Vec<ValidationError>) -> Option<Expression> {
        match self {
            SyntaxTree::Atomic(name) => match Symbol::new(name.as_str()) {
                Ok(symbol) => Some(Expression::Atom(symbol)),
                Err(e) => {
                    errors.push(e);
                    None
                }
            },
            SyntaxTree::Compound { connective, args } => {
                let tag = match connective.parse::<Connective>() {
                    Ok(tag) if tag.arity().accepts(args.len()) => Some(tag),
                    Ok(tag) => {
                        errors.push(ValidationError::ArityMismatch {
                            connective: connective.clone(),
                            expected: tag.arity(),
                            actual: args.len(),
                        });
                        None
                    }
                    Err(e) => {
                        errors.push(e);
                        None
                    }
                };

                let operands: Vec<Option<Expression>> =
                    args.iter().map(|arg| arg.check(errors)).collect();
                let operands: Vec<Expression> = operands.into_iter().collect::<Option<_>>()?;
                Expression::compound(tag?, operands).ok()
            }
        }
    }
}

/// Parse and validate in one step
impl FromStr for Expression {
    type Err = crate::Error;

    fn from_str(text: &str) -> crate::Result<Self> {
        Ok(super::prefix::parse(text)?.validate()?)
    }
}
