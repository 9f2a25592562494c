//! ttentails: propositional entailment by truth-table enumeration
//!
//! This library parses knowledge bases and statements written in a
//! parenthesized prefix notation, validates them into typed expressions,
//! and decides whether a statement is definitely true, definitely false,
//! unknown, or contradictory given the knowledge base.

pub mod config;
pub mod entailment;
pub mod error;
pub mod logic;
pub mod parser;

pub use config::CheckConfig;

// Re-export the checking surface
pub use entailment::{
    check_entail, check_true_false, entails, forced_literals, CheckReport, EntailmentChecker,
    EnumerationPlan, Verdict,
};

// Re-export error types
pub use error::{
    Error, LoadError, ParseError, Result, UnboundSymbol, ValidationError, ValidationErrors,
};

// Re-export representation types
pub use logic::{Arity, Connective, Expression, Model, Operands, Symbol};

// Re-export parsing and loading
pub use parser::{
    expressions_in, load_knowledge_base, load_statement, parse, parse_expression,
    read_knowledge_base, read_statement, SyntaxTree,
};
