//! Error types for ttentails

use crate::logic::{Arity, Symbol};
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while reading prefix notation. No partial tree survives one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },

    #[error("unexpected end of input: unterminated expression")]
    UnterminatedExpression,

    #[error("unexpected trailing input at position {0}")]
    TrailingInput(usize),

    #[error("no expression in input")]
    EmptyInput,
}

/// A single offending node found by the validator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("connective \"{connective}\" with {actual} arguments (expects {expected})")]
    ArityMismatch {
        connective: String,
        expected: Arity,
        actual: usize,
    },

    #[error("unknown connective \"{0}\"")]
    UnknownConnective(String),

    #[error("invalid symbol \"{0}\"")]
    InvalidSymbol(String),
}

/// Every validation error found in one tree, in pre-order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new(errors: Vec<ValidationError>) -> Self {
        ValidationErrors(errors)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Evaluation reached a symbol the model does not bind.
///
/// The entailment engine always seeds complete models, so seeing this means
/// an internal invariant was broken.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("symbol `{0}` has no binding in the model")]
pub struct UnboundSymbol(pub Symbol);

/// Failure while assembling a knowledge base or statement from text sources
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{source_name}:{line}: {error}")]
    Parse {
        source_name: String,
        line: usize,
        #[source]
        error: ParseError,
    },

    #[error("knowledge base is empty")]
    EmptyKnowledgeBase,

    #[error("no statement found in {0}")]
    MissingStatement(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("invalid expression: {0}")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
