//! Assembling a knowledge base and a statement from line-oriented text
//!
//! Each non-blank line that does not start with `#` holds one expression.
//! All expressions of all knowledge base sources are conjoined under a
//! single top-level `and`, so facts written one per line become direct
//! conjuncts of the knowledge base.

use super::prefix::{is_separator, parse};
use super::syntax::SyntaxTree;
use crate::error::LoadError;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Parse every expression line of one source
pub fn expressions_in(source_name: &str, text: &str) -> Result<Vec<SyntaxTree>, LoadError> {
    let mut expressions = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let content = line.trim_start_matches(is_separator);
        if content.is_empty() || content.starts_with('#') {
            continue;
        }
        let tree = parse(line).map_err(|error| LoadError::Parse {
            source_name: source_name.to_string(),
            line: index + 1,
            error,
        })?;
        expressions.push(tree);
    }
    Ok(expressions)
}

/// Conjoin the expressions of all `(name, text)` sources
pub fn load_knowledge_base(sources: &[(&str, &str)]) -> Result<SyntaxTree, LoadError> {
    let mut conjuncts = Vec::new();
    for (name, text) in sources {
        let expressions = expressions_in(name, text)?;
        debug!(source = %name, expressions = expressions.len(), "loaded knowledge base source");
        conjuncts.extend(expressions);
    }
    if conjuncts.is_empty() {
        return Err(LoadError::EmptyKnowledgeBase);
    }
    Ok(SyntaxTree::compound("and", conjuncts))
}

/// The first expression line of a statement source
pub fn load_statement(source_name: &str, text: &str) -> Result<SyntaxTree, LoadError> {
    let mut expressions = expressions_in(source_name, text)?.into_iter();
    let statement = expressions
        .next()
        .ok_or_else(|| LoadError::MissingStatement(source_name.to_string()))?;
    let ignored = expressions.count();
    if ignored > 0 {
        warn!(
            source = %source_name,
            ignored,
            "statement source has extra lines; only the first is checked"
        );
    }
    Ok(statement)
}

/// Read and conjoin knowledge base files
pub fn read_knowledge_base<P: AsRef<Path>>(paths: &[P]) -> Result<SyntaxTree, LoadError> {
    let contents = paths
        .iter()
        .map(|path| read_source(path.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    let sources: Vec<(&str, &str)> = contents
        .iter()
        .map(|(name, text)| (name.as_str(), text.as_str()))
        .collect();
    load_knowledge_base(&sources)
}

/// Read a statement file
pub fn read_statement(path: impl AsRef<Path>) -> Result<SyntaxTree, LoadError> {
    let (name, text) = read_source(path.as_ref())?;
    load_statement(&name, &text)
}

fn read_source(path: &Path) -> Result<(String, String), LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((path.display().to_string(), text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    const RULES: &str = "\
# wumpus world fragment
(if W_1_1 (and S_1_2 S_2_1))

(iff B_1_1 (or P_1_2 P_2_1))
";

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let expressions = expressions_in("rules", RULES).unwrap();
        assert_eq!(expressions.len(), 2);
        assert_eq!(expressions[1].to_string(), "(iff B_1_1 (or P_1_2 P_2_1))");
    }

    #[test]
    fn test_sources_conjoined_under_and() {
        let kb = load_knowledge_base(&[("rules", RULES), ("facts", "(not S_1_2)\nB_1_1\n")])
            .unwrap();
        match &kb {
            SyntaxTree::Compound { connective, args } => {
                assert_eq!(connective, "and");
                assert_eq!(args.len(), 4);
                assert_eq!(args[2].to_string(), "(not S_1_2)");
                assert_eq!(args[3], SyntaxTree::atomic("B_1_1"));
            }
            other => panic!("expected conjunction, got {}", other),
        }
        assert!(kb.is_valid());
    }

    #[test]
    fn test_parse_error_reports_line() {
        let err = load_knowledge_base(&[("facts", "A\n\n(and B C\n")]).unwrap_err();
        match err {
            LoadError::Parse {
                source_name,
                line,
                error,
            } => {
                assert_eq!(source_name, "facts");
                assert_eq!(line, 3);
                assert_eq!(error, ParseError::UnterminatedExpression);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_trailing_input_on_a_line_is_an_error() {
        let err = load_knowledge_base(&[("facts", "A B\n")]).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Parse {
                error: ParseError::TrailingInput(2),
                ..
            }
        ));
    }

    #[test]
    fn test_empty_knowledge_base() {
        let err = load_knowledge_base(&[("facts", "# nothing here\n\n")]).unwrap_err();
        assert!(matches!(err, LoadError::EmptyKnowledgeBase));
    }

    #[test]
    fn test_statement_is_first_expression() {
        let statement = load_statement("stmt", "# query\n(not P_1_2)\nQ\n").unwrap();
        assert_eq!(statement.to_string(), "(not P_1_2)");

        let err = load_statement("stmt", "\n# empty\n").unwrap_err();
        assert_eq!(err.to_string(), "no statement found in stmt");
    }
}
