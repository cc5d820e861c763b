//! Parser implementation for recognizing the program grammar.
//!
//! This module contains the main Parser struct: the token cursor, the
//! error counter, the diagnostic trace, and the panic-mode recovery that
//! every production falls back on. The productions themselves live in
//! `decls`, `stmt`, and `expr`, one function per non-terminal, each
//! taking the parser state by mutable reference.
//!
//! The parser recognizes; it builds nothing. Its output is the error
//! count plus the trace of matched rules, sorted by the report-line
//! counter each entry was tagged with.

use crate::lexer::tokens::{Token, TokenKind};

use super::decls::parse_declarations;

/// One diagnostic or matched-rule entry. The line tag is the report-line
/// counter at the time the entry was recorded and is the sort key for
/// the final listing.
#[derive(Debug, Clone)]
pub struct TraceEntry {
    pub line: u32,
    pub text: String,
}

/// Saved cursor state for speculative parsing. Restoring a checkpoint
/// also discards any trace entries and error increments recorded after
/// it was taken.
pub struct Checkpoint {
    pos: usize,
    report_line: u32,
    error_count: u32,
    trace_len: usize,
}

/// The recognizer state threaded through every production.
pub struct Parser {
    /// The token sequence, read-only once set
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Mirror of `tokens[pos]`, or a synthetic end-of-stream token once
    /// the cursor has run past the sequence
    current: Token,
    /// True source line of the current token
    line_count: u32,
    /// Diagnostic labeling counter, advanced at statement and block
    /// boundaries; drifts from true source lines by design
    report_line: u32,
    /// Number of grammar mismatches recorded so far
    error_count: u32,
    /// Whether the cursor is inside a function body; gates inline
    /// variable initialization
    in_function_scope: bool,
    /// Unordered trace, sorted once when diagnostics are requested
    trace: Vec<TraceEntry>,
}

impl Default for Parser {
    fn default() -> Self {
        Parser::new()
    }
}

impl Parser {
    pub fn new() -> Self {
        Parser {
            tokens: vec![],
            pos: 0,
            current: Token::eof(1),
            line_count: 1,
            report_line: 1,
            error_count: 0,
            in_function_scope: false,
            trace: vec![],
        }
    }

    /// Initializes the cursor over a fresh token sequence.
    pub fn set_tokens(&mut self, input_tokens: Vec<Token>) {
        self.tokens = input_tokens;
        self.pos = 0;
        if let Some(first) = self.tokens.first() {
            self.current = first.clone();
            self.line_count = self.current.line;
        }
    }

    /// Runs the recognizer over the whole program and returns the error
    /// count. Always terminates: every recovery path advances the cursor
    /// or reaches end-of-stream.
    pub fn parse(&mut self) -> u32 {
        if self.tokens.is_empty() {
            self.error_count += 1;
            self.push_diagnostic(0, String::from("No tokens to parse!"));
            return self.error_count;
        }

        parse_declarations(self);
        if self.current.kind != TokenKind::Eof {
            self.recover();
        }
        self.error_count
    }

    pub fn error_count(&self) -> u32 {
        self.error_count
    }

    /// Returns the trace sorted ascending by each entry's line tag.
    /// The sort is stable: entries with equal tags keep insertion order.
    pub fn diagnostics(&self) -> Vec<String> {
        let mut entries = self.trace.clone();
        entries.sort_by_key(|entry| entry.line);
        entries.into_iter().map(|entry| entry.text).collect()
    }

    pub fn current(&self) -> &Token {
        &self.current
    }

    pub fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// True when the current token is a brace with exactly this text.
    pub fn at_brace(&self, text: &str) -> bool {
        self.current.kind == TokenKind::Brace && self.current.text == text
    }

    pub fn report_line(&self) -> u32 {
        self.report_line
    }

    pub fn in_function_scope(&self) -> bool {
        self.in_function_scope
    }

    pub fn set_function_scope(&mut self, inside: bool) {
        self.in_function_scope = inside;
    }

    /// Advances the cursor one token. The report-line counter ticks when
    /// the token being stepped past is a semicolon, a block-comment end,
    /// line-comment content, or a curly brace.
    pub fn next_token(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            if self.current.kind == TokenKind::Semicolon
                || self.current.kind == TokenKind::CommentEnd
                || self.current.kind == TokenKind::LineCommentContent
                || (self.current.kind == TokenKind::Brace
                    && (self.current.text == "{" || self.current.text == "}"))
            {
                self.report_line += 1;
            }
            self.pos += 1;
            self.current = self.tokens[self.pos].clone();
            self.line_count = self.current.line;
        } else {
            self.current = Token::eof(self.line_count);
        }
    }

    /// Panic-mode recovery: one diagnostic, one error increment, then
    /// skip to the next semicolon, brace, or end-of-stream. A semicolon
    /// stopping point is consumed as well when input remains. Control
    /// returns normally to the production that gave up.
    pub fn recover(&mut self) {
        self.error_count += 1;
        let line = self.report_line;
        self.push_diagnostic(
            line,
            format!(
                "Line : {} Not Matched Error: Unexpected token '{}'",
                line, self.current.text
            ),
        );

        while self.current.kind != TokenKind::Semicolon
            && self.current.kind != TokenKind::Brace
            && self.current.kind != TokenKind::Eof
            && self.pos < self.tokens.len()
        {
            self.next_token();
        }
        if self.current.kind == TokenKind::Semicolon && self.pos + 1 < self.tokens.len() {
            self.next_token();
        }
    }

    pub fn trace_rule(&mut self, rule: &str) {
        let line = self.report_line;
        self.push_diagnostic(line, format!("Line : {} Matched Rule used: {}", line, rule));
    }

    pub fn push_diagnostic(&mut self, line: u32, text: String) {
        self.trace.push(TraceEntry { line, text });
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            pos: self.pos,
            report_line: self.report_line,
            error_count: self.error_count,
            trace_len: self.trace.len(),
        }
    }

    /// Restores a checkpoint taken before a speculative parse. Trace
    /// entries and error increments recorded since are discarded; the
    /// cursor and report-line counter rewind so the committed branch
    /// re-derives identical tags.
    pub fn rewind(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.pos;
        self.current = self.tokens[self.pos].clone();
        self.line_count = self.current.line;
        self.report_line = checkpoint.report_line;
        self.error_count = checkpoint.error_count;
        self.trace.truncate(checkpoint.trace_len);
    }
}
