//! Propositional logic representation and semantics
//!
//! This module provides the validated expression tree, truth assignments
//! (models), and evaluation of expressions under a model.

pub mod evaluate;
pub mod expression;
pub mod model;

pub use expression::{is_symbol_char, Arity, Connective, Expression, Operands, Symbol};
pub use model::Model;
