//! Front-end driver.
//!
//! Wires a source path to a report destination: reads the file, runs the
//! lexer, renders the token table, runs the recognizer, renders the
//! sorted parser results, and emits the identical report to stdout and
//! the results file.

use std::fs;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::tokenize, tokens::Token},
    parser::parser::Parser,
    read_source,
};

pub struct Compiler {
    source_path: String,
    results_path: String,
}

impl Compiler {
    pub fn new(source_path: &str, results_path: &str) -> Compiler {
        Compiler {
            source_path: String::from(source_path),
            results_path: String::from(results_path),
        }
    }

    /// Runs the full front end. Returns `Ok(true)` when the source is
    /// clean: zero lexical errors and zero syntax errors. `Err` is
    /// reserved for the fatal boundaries (unreadable source or include,
    /// unwritable results file, inclusion cycle).
    pub fn compile(&self) -> Result<bool, Error> {
        let source = read_source(&self.source_path)?;
        let tokens = tokenize(&source)?;

        let mut report = String::new();
        let lexical_errors = render_token_table(&tokens, &mut report);

        let mut parser = Parser::new();
        parser.set_tokens(tokens);
        let syntax_errors = parser.parse();
        render_parser_results(&parser.diagnostics(), syntax_errors, &mut report);

        print!("{}", report);
        fs::write(&self.results_path, &report).map_err(|_| {
            Error::new(ErrorImpl::FileWrite {
                file: self.results_path.clone(),
            })
        })?;

        Ok(lexical_errors == 0 && syntax_errors == 0)
    }
}

/// Appends the token listing to the report and returns the number of
/// lexically erroneous tokens. Lines are true source lines, not the
/// parser's report-line counter.
pub fn render_token_table(tokens: &[Token], report: &mut String) -> u32 {
    report.push_str(&format!("{:<8}| {:<15}| Token Type\n", "Line", "Lexeme"));
    report.push_str(&format!("{}\n", "-".repeat(50)));

    let mut error_count = 0;
    for token in tokens {
        let error_note = if token.error { " (Error)" } else { "" };
        report.push_str(&format!(
            "{:<8}| {:<15}| {}{}\n",
            token.line, token.text, token.kind, error_note
        ));
        if token.error {
            error_count += 1;
        }
    }

    report.push_str(&format!(
        "\nTotal Number of lexical errors: {}\n",
        error_count
    ));
    error_count
}

/// Appends the sorted diagnostic listing and the syntax-error total.
pub fn render_parser_results(diagnostics: &[String], error_count: u32, report: &mut String) {
    report.push_str("\nParser Results:\n\n");
    report.push_str(&format!("{}\n", "-".repeat(50)));
    for line in diagnostics {
        report.push_str(line);
        report.push('\n');
    }
    report.push_str(&format!("Total NO of errors: {}\n", error_count));
}
