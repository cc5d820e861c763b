//! Driver module for the front end.
//!
//! This module owns the end-to-end run: source file in, token table and
//! parser results out, duplicated to the console and a results file.

pub mod compiler;
