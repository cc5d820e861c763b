//! Utility macros for the front end.
//!
//! This module defines the `MK_TOKEN!` helper macro used throughout the
//! lexer to reduce token-construction boilerplate.

/// Creates a Token instance.
///
/// The error flag is derived from the kind, so a token is flagged
/// exactly when its category belongs to the error family.
///
/// # Arguments
///
/// * `$line` - The 1-based source line the token starts on
/// * `$text` - The token's literal text
/// * `$kind` - The TokenKind
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(1, "42".to_string(), TokenKind::Constant);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($line:expr, $text:expr, $kind:expr) => {{
        let kind = $kind;
        Token {
            line: $line,
            text: $text,
            error: kind.is_error(),
            kind,
        }
    }};
}
