//! Error types for the fatal boundaries of the front end.
//!
//! Malformed source never produces one of these: lexical problems become
//! flagged tokens and grammar mismatches are counted diagnostics. The
//! variants here cover the conditions that terminate a run instead of
//! producing a report:
//!
//! - A source or included file that cannot be opened
//! - A results file that cannot be written
//! - An inclusion cycle

pub mod errors;
