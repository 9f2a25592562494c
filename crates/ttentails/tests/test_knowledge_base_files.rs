//! Loading knowledge bases and statements from files

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use ttentails::{
    check_true_false, read_knowledge_base, read_statement, CheckConfig, LoadError, ParseError,
    Verdict,
};

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_files_are_conjoined() {
    let dir = TempDir::new().unwrap();
    let rules = write(dir.path(), "rules.txt", "# rules\n(if A B)\n\n(if B C)\n");
    let facts = write(dir.path(), "facts.txt", "A\n");
    let statement = write(dir.path(), "statement.txt", "\n# goal\nC\n");

    let tree = read_knowledge_base(&[&rules, &facts]).unwrap();
    assert_eq!(tree.to_string(), "(and (if A B) (if B C) A)");

    let kb = tree.validate().unwrap();
    let statement = read_statement(&statement).unwrap().validate().unwrap();
    let report = check_true_false(&kb, &statement, &CheckConfig::default());
    assert_eq!(report.verdict, Verdict::DefinitelyTrue);
    assert_eq!(report.forced.value("A"), Some(true));
}

#[test]
fn test_statement_uses_first_expression_line() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "statement.txt", "# comment\n(not A)\nB\n");
    let statement = read_statement(&path).unwrap();
    assert_eq!(statement.to_string(), "(not A)");
}

#[test]
fn test_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.txt");
    match read_knowledge_base(&[&missing]) {
        Err(LoadError::Io { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected io error, got {:?}", other),
    }
}

#[test]
fn test_parse_error_reports_line() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "kb.txt", "A\n# fine\n(and A B\n");
    match read_knowledge_base(&[&path]) {
        Err(LoadError::Parse { line, error, .. }) => {
            assert_eq!(line, 3);
            assert_eq!(error, ParseError::UnterminatedExpression);
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_trailing_input_on_a_line_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "kb.txt", "A B\n");
    assert!(matches!(
        read_knowledge_base(&[&path]),
        Err(LoadError::Parse {
            line: 1,
            error: ParseError::TrailingInput(2),
            ..
        })
    ));
}

#[test]
fn test_empty_sources() {
    let dir = TempDir::new().unwrap();
    let kb = write(dir.path(), "kb.txt", "# nothing here\n\n");
    assert!(matches!(
        read_knowledge_base(&[&kb]),
        Err(LoadError::EmptyKnowledgeBase)
    ));
    assert!(matches!(
        read_statement(&kb),
        Err(LoadError::MissingStatement(_))
    ));
}

#[test]
fn test_config_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "config.json", r#"{"short_circuit": false}"#);
    let config = CheckConfig::from_json_file(&path).unwrap();
    assert!(config.literal_forcing);
    assert!(!config.short_circuit);
}
