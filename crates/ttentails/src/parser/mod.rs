//! Prefix-notation parser, validator and knowledge base loader

pub mod knowledge_base;
pub mod prefix;
pub mod syntax;
pub mod validate;

// Re-export main parsing functions and types
pub use knowledge_base::{
    expressions_in, load_knowledge_base, load_statement, read_knowledge_base, read_statement,
};
pub use prefix::{parse, parse_expression};
pub use syntax::SyntaxTree;
