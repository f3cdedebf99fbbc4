//! Loading grammars from files and configuration

use piyathon_highlight::highlight::config::Loader;
use piyathon_highlight::highlight::grammar_file::{self, GrammarFileError};
use piyathon_highlight::highlight::{GrammarError, HighlightError, Highlighter, Scope, WordClass};
use std::io::Write;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_load_yaml_grammar_and_highlight() {
    let grammar = grammar_file::load_validated(fixture_path("mini.yaml")).unwrap();
    assert_eq!(grammar.name, "Mini");

    let mut highlighter = Highlighter::with_defaults();
    highlighter.registry_mut().register("mini", grammar);

    let source = std::fs::read_to_string(fixture_path("sample.mini")).unwrap();
    let tokens: Vec<_> = highlighter
        .highlight_path(&fixture_path("sample.mini"), &source)
        .unwrap()
        .collect();
    let scopes: Vec<(Scope, &str)> = tokens
        .iter()
        .filter(|t| t.scope != Scope::Plain)
        .map(|t| (t.scope, t.text))
        .collect();
    assert_eq!(
        scopes,
        vec![
            (Scope::Keyword, "let"),
            (Scope::Identifier, "x"),
            (Scope::String, "\"hi\""),
            (Scope::Comment, "// note"),
            (Scope::Keyword, "if"),
            (Scope::Literal, "nil"),
        ]
    );
}

#[test]
fn test_validation_rejects_overlapping_word_sets() {
    let err = grammar_file::load_validated(fixture_path("broken.yaml")).unwrap_err();
    match err {
        GrammarFileError::Invalid(errors) => assert_eq!(
            errors,
            vec![GrammarError::DuplicateWord {
                word: "print".into(),
                first: WordClass::Keyword,
                second: WordClass::BuiltIn,
            }]
        ),
        other => panic!("Expected Invalid, got {:?}", other),
    }

    // Unvalidated loads keep the grammar, with keyword precedence on the overlap
    let grammar = grammar_file::load(fixture_path("broken.yaml")).unwrap();
    assert_eq!(grammar.classify("print"), Some(WordClass::Keyword));
}

#[test]
fn test_missing_grammar_file_is_an_io_error() {
    let err = grammar_file::load(fixture_path("missing.yaml")).unwrap_err();
    assert!(matches!(err, GrammarFileError::Io(_)));
}

#[test]
fn test_grammar_files_from_config() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        "[engine]\ngrammar_files = [{:?}]",
        fixture_path("mini.yaml").display().to_string()
    )
    .unwrap();

    let config = Loader::new().with_file(file.path()).build().unwrap();
    let highlighter = Highlighter::from_config(&config).unwrap();
    assert_eq!(
        highlighter.registry().list_languages(),
        vec!["mini".to_string(), "piyathon".to_string()]
    );
}

#[test]
fn test_invalid_grammar_in_config_fails_when_validating() {
    let config = Loader::new()
        .set_override(
            "engine.grammar_files",
            vec![fixture_path("broken.yaml").display().to_string()],
        )
        .unwrap()
        .build()
        .unwrap();
    let err = Highlighter::from_config(&config).err().unwrap();
    assert!(matches!(
        err,
        HighlightError::GrammarFile(GrammarFileError::Invalid(_))
    ));

    let config = Loader::new()
        .set_override(
            "engine.grammar_files",
            vec![fixture_path("broken.yaml").display().to_string()],
        )
        .unwrap()
        .set_override("engine.validate_grammars", false)
        .unwrap()
        .build()
        .unwrap();
    let highlighter = Highlighter::from_config(&config).unwrap();
    assert!(highlighter.registry().has("broken"));
}
