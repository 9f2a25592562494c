//! Truth value of an expression under a model

use super::expression::Expression;
use super::model::Model;
use crate::error::UnboundSymbol;

impl Expression {
    /// Evaluate under `model`, reporting the first symbol it does not bind.
    ///
    /// Every operand is evaluated, so an unbound symbol is found even when an
    /// earlier operand already decides the result.
    pub fn try_evaluate(&self, model: &Model) -> Result<bool, UnboundSymbol> {
        match self {
            Expression::Atom(symbol) => model
                .value(symbol.as_str())
                .ok_or_else(|| UnboundSymbol(symbol.clone())),
            Expression::Not(operand) => Ok(!operand.try_evaluate(model)?),
            Expression::If(operands) => {
                let [antecedent, consequent] = &**operands;
                let antecedent = antecedent.try_evaluate(model)?;
                let consequent = consequent.try_evaluate(model)?;
                Ok(!antecedent || consequent)
            }
            Expression::Iff(operands) => {
                let [left, right] = &**operands;
                Ok(left.try_evaluate(model)? == right.try_evaluate(model)?)
            }
            Expression::And(operands) => operands
                .iter()
                .try_fold(true, |acc, op| op.try_evaluate(model).map(|v| v && acc)),
            Expression::Or(operands) => operands
                .iter()
                .try_fold(false, |acc, op| op.try_evaluate(model).map(|v| v || acc)),
            // running parity: true iff an odd number of operands are true
            Expression::Xor(operands) => operands
                .iter()
                .try_fold(false, |acc, op| op.try_evaluate(model).map(|v| acc ^ v)),
        }
    }

    /// Evaluate under a model that binds every symbol in the tree.
    ///
    /// # Panics
    ///
    /// Panics if a symbol has no binding. Callers guarantee completeness, so
    /// a missing binding is a bug and is never defaulted to `false`.
    pub fn evaluate(&self, model: &Model) -> bool {
        match self.try_evaluate(model) {
            Ok(value) => value,
            Err(unbound) => panic!("{} (model: {})", unbound, model),
        }
    }
}
