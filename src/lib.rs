#![allow(clippy::module_inception)]

use std::fs;

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};

pub mod compiler;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Reads a source file into memory. Failure here is fatal to the run:
/// both the top-level file and every file named by an inclusion
/// directive come through this boundary.
pub fn read_source(file: &str) -> Result<String, Error> {
    fs::read_to_string(file).map_err(|_| {
        Error::new(ErrorImpl::FileRead {
            file: String::from(file),
        })
    })
}

pub fn display_error(error: &Error) {
    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
}
