//! Integration tests for the end-to-end front end.
//!
//! These tests verify that the complete pipeline works from a source
//! file through tokenization, inclusion splicing, recognition, and
//! report generation.

use imwc::{
    compiler::compiler::Compiler,
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::parser::Parser,
    read_source,
};
use std::{env, fs};

fn results_path(name: &str) -> String {
    env::temp_dir()
        .join(name)
        .to_string_lossy()
        .into_owned()
}

#[test]
fn test_compile_clean_program() {
    let out = results_path("imwc_test_clean_result.txt");
    let compiler = Compiler::new("tests/data/clean.imw", &out);

    let clean = compiler.compile().unwrap();
    assert!(clean, "clean source should report no errors");

    let report = fs::read_to_string(&out).unwrap();
    assert!(report.contains("Total Number of lexical errors: 0"));
    assert!(report.contains("Parser Results:"));
    assert!(report.contains("Total NO of errors: 0"));
    assert!(report.contains("Matched Rule used: Function-declaration"));

    fs::remove_file(&out).ok();
}

#[test]
fn test_compile_program_with_errors() {
    let out = results_path("imwc_test_dirty_result.txt");
    let compiler = Compiler::new("tests/data/dirty.imw", &out);

    let clean = compiler.compile().unwrap();
    assert!(!clean, "flagged tokens and mismatches should fail the run");

    let report = fs::read_to_string(&out).unwrap();
    assert!(report.contains("(Error)"));
    assert!(report.contains("Total Number of lexical errors: 1"));
    assert!(report.contains("Not Matched Error"));

    fs::remove_file(&out).ok();
}

#[test]
fn test_compile_missing_source_is_fatal() {
    let out = results_path("imwc_test_missing_result.txt");
    let compiler = Compiler::new("tests/data/zz_not_there.imw", &out);

    let result = compiler.compile();
    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "FileRead");
}

#[test]
fn test_inclusion_splices_tokens_at_front() {
    let source = read_source("tests/data/main_with_include.imw").unwrap();
    let tokens = tokenize(&source).unwrap();

    // The included file's declaration leads the sequence
    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].text, "shared");

    // The directive and filename tokens stay visible
    assert!(tokens.iter().any(|t| t.kind == TokenKind::Inclusion));
    assert!(tokens
        .iter()
        .any(|t| t.kind == TokenKind::StringLiteral && t.text.contains("shared.imw")));

    // Exactly one terminator, at the end
    let eof_count = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
    assert_eq!(eof_count, 1);
    assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
}

#[test]
fn test_inclusion_parses_clean() {
    let source = read_source("tests/data/main_with_include.imw").unwrap();
    let tokens = tokenize(&source).unwrap();

    let mut parser = Parser::new();
    parser.set_tokens(tokens);
    assert_eq!(parser.parse(), 0);

    let diagnostics = parser.diagnostics();
    assert!(diagnostics.iter().any(|d| d.contains("Include-command")));
    assert_eq!(
        diagnostics
            .iter()
            .filter(|d| d.contains("Variable-declaration"))
            .count(),
        2
    );
}

#[test]
fn test_inclusion_cycle_is_fatal() {
    let source = read_source("tests/data/cyclic.imw").unwrap();
    let result = tokenize(&source);

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "IncludeCycle");
}

#[test]
fn test_inclusion_of_missing_file_is_fatal() {
    let source = read_source("tests/data/missing_include.imw").unwrap();
    let result = tokenize(&source);

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "FileRead");
}

#[test]
fn test_report_token_table_lists_every_token() {
    let out = results_path("imwc_test_table_result.txt");
    let compiler = Compiler::new("tests/data/clean.imw", &out);
    compiler.compile().unwrap();

    let report = fs::read_to_string(&out).unwrap();
    // One row per token: the declaration name and the Eof row both show
    assert!(report.contains("main"));
    assert!(report.contains("Eof"));
    assert!(report.contains("Semicolon"));

    fs::remove_file(&out).ok();
}
