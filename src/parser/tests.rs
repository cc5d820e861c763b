//! Unit tests for the parser module.
//!
//! This module contains tests for recognizing the language constructs:
//! - Variable, array, struct, and function declarations
//! - Statements and both iteration forms
//! - Expression recognition and the assignment/expression speculation
//! - Panic-mode recovery and the diagnostic trace

use crate::lexer::{
    lexer::tokenize,
    tokens::{Token, TokenKind},
};
use crate::MK_TOKEN;

use super::parser::Parser;

fn parse_source(source: &str) -> Parser {
    let tokens = tokenize(source).unwrap();
    let mut parser = Parser::new();
    parser.set_tokens(tokens);
    parser.parse();
    parser
}

#[test]
fn test_parse_variable_declaration() {
    let parser = parse_source("Imw x;");

    assert_eq!(parser.error_count(), 0);
    assert_eq!(
        parser.diagnostics(),
        vec!["Line : 1 Matched Rule used: Variable-declaration".to_string()]
    );
}

#[test]
fn test_parse_type_without_identifier_recovers_once() {
    let parser = parse_source("Imw ;");

    assert_eq!(parser.error_count(), 1);
    let diagnostics = parser.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0],
        "Line : 1 Not Matched Error: Unexpected token ';'"
    );
}

#[test]
fn test_parse_array_declaration() {
    let parser = parse_source("Imw arr[10];");

    assert_eq!(parser.error_count(), 0);
    assert!(parser
        .diagnostics()
        .iter()
        .any(|d| d.contains("Variable-declaration")));
}

#[test]
fn test_parse_struct_declaration() {
    let parser = parse_source("Loli Point { Imw x; Imw y; };");

    assert_eq!(parser.error_count(), 0);
    assert!(parser
        .diagnostics()
        .iter()
        .any(|d| d.contains("Struct-declaration")));
}

#[test]
fn test_parse_function_declaration() {
    let parser = parse_source("Imw add(Imw a, Imw b) { Turnback a + b; }");

    assert_eq!(parser.error_count(), 0);
    let diagnostics = parser.diagnostics();
    assert!(diagnostics[0].contains("Function-declaration"));
    assert!(diagnostics.iter().any(|d| d.contains("Jump-statement")));
}

#[test]
fn test_parse_void_parameter_list() {
    let parser = parse_source("NOReturn main(NOReturn) { Turnback; }");

    assert_eq!(parser.error_count(), 0);
}

#[test]
fn test_parse_local_struct_variable() {
    let parser = parse_source("NOReturn main(NOReturn) { Loli Point p; Turnback; }");

    assert_eq!(parser.error_count(), 0);
}

#[test]
fn test_parse_assignment_statement() {
    let parser = parse_source("NOReturn main(NOReturn) { Imw x; x = 5; }");

    assert_eq!(parser.error_count(), 0);
    assert!(parser
        .diagnostics()
        .iter()
        .any(|d| d.contains("Expression-statement")));
}

#[test]
fn test_parse_plain_expression_statement_rewinds_cleanly() {
    let parser = parse_source("NOReturn main(NOReturn) { Imw x; x + 1; }");

    // The speculative assignment attempt must leave no residue
    assert_eq!(parser.error_count(), 0);
    assert!(!parser
        .diagnostics()
        .iter()
        .any(|d| d.contains("Not Matched")));
}

#[test]
fn test_parse_qualified_assignment() {
    let parser = parse_source("NOReturn main(NOReturn) { Imw x; x->y = 1; x[0] = 2; }");

    assert_eq!(parser.error_count(), 0);
}

#[test]
fn test_parse_selection_statement() {
    let source = "NOReturn main(NOReturn) { Imw x; IfTrue (x == 1) { x = 2; } Otherwise { x = 3; } }";
    let parser = parse_source(source);

    assert_eq!(parser.error_count(), 0);
    let diagnostics = parser.diagnostics();
    assert!(diagnostics.iter().any(|d| d.contains("Selection-statement")));
    assert_eq!(
        diagnostics
            .iter()
            .filter(|d| d.contains("Compound-statement"))
            .count(),
        2
    );
}

#[test]
fn test_parse_condition_loop() {
    let parser = parse_source("NOReturn main(NOReturn) { Imw x; RepeatWhen (x < 10) x = x + 1; }");

    assert_eq!(parser.error_count(), 0);
    assert!(parser
        .diagnostics()
        .iter()
        .any(|d| d.contains("Iteration-statement")));
}

#[test]
fn test_parse_three_clause_loop_with_expression_init() {
    let parser =
        parse_source("NOReturn main(NOReturn) { Imw i; Reiterate (i = 0; i < 10; i = i + 1) i; }");

    assert_eq!(parser.error_count(), 0);
}

#[test]
fn test_parse_three_clause_loop_with_declaration_init() {
    let parser =
        parse_source("NOReturn main(NOReturn) { Reiterate (Imw j; j < 10; j = j + 1) j; }");

    assert_eq!(parser.error_count(), 0);
}

#[test]
fn test_parse_jump_statements() {
    let parser = parse_source("NOReturn main(NOReturn) { Turnback 1 + 2; Stop; }");

    assert_eq!(parser.error_count(), 0);
    assert_eq!(
        parser
            .diagnostics()
            .iter()
            .filter(|d| d.contains("Jump-statement"))
            .count(),
        2
    );
}

#[test]
fn test_parse_call_expression() {
    let parser = parse_source("NOReturn main(NOReturn) { Imw x; x = add(1, x->y); }");

    assert_eq!(parser.error_count(), 0);
}

#[test]
fn test_parse_initializer_outside_function_is_rejected() {
    let parser = parse_source("Imw x = 5;");

    assert_eq!(parser.error_count(), 2);
    assert!(parser
        .diagnostics()
        .iter()
        .any(|d| d.contains("Variable initialization only allowed inside function")));
}

#[test]
fn test_parse_initializer_inside_function_is_allowed() {
    let parser = parse_source("NOReturn main(NOReturn) { Imw x = 5; }");

    assert_eq!(parser.error_count(), 0);
}

#[test]
fn test_parse_comment_production() {
    let parser = parse_source("/@ header @/ Imw x;");

    assert_eq!(parser.error_count(), 0);
    assert!(parser.diagnostics().iter().any(|d| d.contains("Comment")));
}

#[test]
fn test_parse_line_comment_production() {
    let parser = parse_source("/^ header\nImw x;");

    assert_eq!(parser.error_count(), 0);
    assert!(parser.diagnostics().iter().any(|d| d.contains("Comment")));
}

#[test]
fn test_parse_include_command() {
    let tokens = vec![
        MK_TOKEN!(1, String::from("include"), TokenKind::Inclusion),
        MK_TOKEN!(1, String::from("\"lib.imw\""), TokenKind::StringLiteral),
        MK_TOKEN!(1, String::from(";"), TokenKind::Semicolon),
        Token::eof(1),
    ];
    let mut parser = Parser::new();
    parser.set_tokens(tokens);
    parser.parse();

    assert_eq!(parser.error_count(), 0);
    assert_eq!(
        parser.diagnostics(),
        vec!["Line : 1 Matched Rule used: Include-command".to_string()]
    );
}

#[test]
fn test_parse_trailing_garbage_is_one_error() {
    let parser = parse_source("Imw x; 42");

    assert_eq!(parser.error_count(), 1);
}

#[test]
fn test_parse_empty_token_sequence() {
    let mut parser = Parser::new();
    parser.set_tokens(vec![]);

    assert_eq!(parser.parse(), 1);
    assert!(parser
        .diagnostics()
        .iter()
        .any(|d| d.contains("No tokens to parse!")));
}

#[test]
fn test_parse_recovery_continues_after_bad_declaration() {
    let parser = parse_source("Imw ; Imw y;");

    assert_eq!(parser.error_count(), 1);
    assert!(parser
        .diagnostics()
        .iter()
        .any(|d| d.contains("Variable-declaration")));
}

#[test]
fn test_diagnostics_sorted_by_line_tag() {
    let source = "NOReturn main(NOReturn) { Imw x; x = 1; x = 2; Turnback; }";
    let parser = parse_source(source);

    assert_eq!(parser.error_count(), 0);
    let diagnostics = parser.diagnostics();
    let tags: Vec<u32> = diagnostics
        .iter()
        .map(|d| {
            d.trim_start_matches("Line : ")
                .split_whitespace()
                .next()
                .unwrap()
                .parse()
                .unwrap()
        })
        .collect();
    let mut sorted = tags.clone();
    sorted.sort();
    assert_eq!(tags, sorted);
    assert!(diagnostics[0].contains("Function-declaration"));
}
